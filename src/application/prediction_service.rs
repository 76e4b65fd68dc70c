use crate::application::ml::logistic_classifier::LogisticClassifier;
use crate::application::ml::predictor::InductionClassifier;
use crate::config::ModelEnvConfig;
use crate::domain::adjustment::{adjust_prob, adjust_vote, ext_factor};
use crate::domain::errors::ModelError;
use crate::domain::growth::project;
use crate::domain::ml::training_set::REFERENCE_TRAINING_SET;
use crate::domain::player::{ExternalFactors, FeatureVector};
use crate::domain::prediction::{PredictionRequest, PredictionResult};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the classifier pair, the external-factor adjustment and the
/// vote share projection for one player.
///
/// The classifiers are fitted once and only read afterwards, so one
/// service can be shared freely across threads.
#[derive(Clone)]
pub struct PredictionService {
    vote_model: Arc<dyn InductionClassifier>,
    prob_model: Arc<dyn InductionClassifier>,
}

impl PredictionService {
    pub fn new(
        vote_model: Arc<dyn InductionClassifier>,
        prob_model: Arc<dyn InductionClassifier>,
    ) -> Self {
        Self {
            vote_model,
            prob_model,
        }
    }

    /// Fits both classifiers on the reference training set.
    pub fn bootstrap(config: &ModelEnvConfig) -> Result<Self, ModelError> {
        let vote_model =
            LogisticClassifier::fit("vote_model", &REFERENCE_TRAINING_SET, config.regularization)?;
        let prob_model =
            LogisticClassifier::fit("prob_model", &REFERENCE_TRAINING_SET, config.regularization)?;

        info!(
            "Models fitted on {} reference careers (alpha={}): coefficients={:?}, intercept={:.6}",
            REFERENCE_TRAINING_SET.len(),
            config.regularization,
            vote_model.weights().coefficients,
            vote_model.weights().intercept
        );

        Ok(Self::new(Arc::new(vote_model), Arc::new(prob_model)))
    }

    pub fn predict(
        &self,
        name: &str,
        features: FeatureVector,
        factors: ExternalFactors,
    ) -> PredictionResult {
        let basic_vote = 100.0 * self.vote_model.predict_proba(&features);
        let basic_prob = self.prob_model.predict_proba(&features);

        let factor = ext_factor(&factors);
        let final_vote = adjust_vote(basic_vote, factor);
        let final_prob = adjust_prob(basic_prob, factor);

        debug!(
            "{}: basic_vote={:.3} basic_prob={:.4} ext_factor={:.3} -> final_vote={:.3} final_prob={:.4}",
            name, basic_vote, basic_prob, factor, final_vote, final_prob
        );

        PredictionResult {
            name: name.to_string(),
            basic_vote,
            final_vote,
            basic_prob,
            final_prob,
            vote_trend: project(final_vote),
        }
    }

    pub fn predict_request(&self, request: &PredictionRequest) -> PredictionResult {
        self.predict(&request.name, request.features, request.factors)
    }

    /// Predicts a whole roster in parallel. Results keep the input order.
    pub fn predict_batch(&self, requests: &[PredictionRequest]) -> Vec<PredictionResult> {
        requests
            .par_iter()
            .map(|request| self.predict_request(request))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::logistic_classifier::LogisticWeights;

    /// Fixed-probability model so service arithmetic can be checked exactly
    struct ConstantModel(f64);

    impl InductionClassifier for ConstantModel {
        fn predict_proba(&self, _features: &FeatureVector) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "constant"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    fn constant_service(p: f64) -> PredictionService {
        PredictionService::new(Arc::new(ConstantModel(p)), Arc::new(ConstantModel(p)))
    }

    fn neutral() -> ExternalFactors {
        ExternalFactors {
            doping: false,
            leadership: 0.0,
            influence: 0.0,
            era_adjust: 0.0,
        }
    }

    #[test]
    fn test_zero_factor_passes_model_output_through() {
        let service = constant_service(0.4);
        let result = service.predict("Joe Mauer", FeatureVector::new(55.2, 118.0, 47.1), neutral());

        assert!((result.basic_vote - 40.0).abs() < 1e-9);
        assert!((result.final_vote - result.basic_vote).abs() < 1e-9);
        assert!((result.final_prob - result.basic_prob).abs() < 1e-12);
        assert_eq!(result.vote_trend[0], result.final_vote);
        assert_eq!(result.vote_trend.len(), 10);
    }

    #[test]
    fn test_shared_factor_applies_to_both_scales() {
        let service = constant_service(0.8);
        let factors = ExternalFactors {
            doping: true,
            ..neutral()
        };
        let result = service.predict("Slugger", FeatureVector::new(90.0, 200.0, 70.0), factors);

        assert!((result.final_vote - 52.0).abs() < 1e-9);
        assert!((result.final_prob - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_final_values_are_clamped() {
        let service = constant_service(0.95);
        let factors = ExternalFactors {
            doping: false,
            leadership: 1.0,
            influence: 1.0,
            era_adjust: 0.3,
        };
        let result = service.predict("Legend", FeatureVector::new(120.0, 250.0, 95.0), factors);

        assert_eq!(result.final_vote, 100.0);
        assert_eq!(result.final_prob, 1.0);
        assert!(result.vote_trend.iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_batch_keeps_order() {
        let model = LogisticClassifier::from_weights(
            "fixed",
            LogisticWeights {
                coefficients: [0.1, 0.0, 0.0],
                intercept: -7.0,
            },
        );
        let model: Arc<dyn InductionClassifier> = Arc::new(model);
        let service = PredictionService::new(model.clone(), model);

        let requests: Vec<PredictionRequest> = (0..20)
            .map(|i| PredictionRequest {
                name: format!("Player {}", i),
                features: FeatureVector::new(40.0 + i as f64 * 3.0, 100.0, 50.0),
                factors: ExternalFactors::default(),
            })
            .collect();

        let results = service.predict_batch(&requests);
        assert_eq!(results.len(), requests.len());
        for (request, result) in requests.iter().zip(&results) {
            assert_eq!(result, &service.predict_request(request));
        }
    }
}
