use super::predictor::InductionClassifier;
use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{
    FEATURE_COUNT, FEATURE_NAMES, features_to_array, features_to_f64_vector,
};
use crate::domain::player::{FeatureVector, TrainingExample};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use statrs::function::logistic::logistic;
use tracing::debug;

/// Learned parameters of a binary logistic model, in feature registry order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticWeights {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl LogisticWeights {
    /// Log-odds of election for the given features.
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        features_to_array(features)
            .iter()
            .zip(self.coefficients.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w)
    }
}

/// L2-regularised logistic regression over the three career features.
///
/// Fitting goes through smartcore's L-BFGS solver; the weights are then
/// copied out so prediction is a plain dot product through the logistic
/// link.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    label: String,
    weights: LogisticWeights,
}

impl LogisticClassifier {
    pub fn fit(
        label: &str,
        examples: &[TrainingExample],
        regularization: f64,
    ) -> Result<Self, ModelError> {
        validate_training_set(examples)?;
        if !regularization.is_finite() || regularization < 0.0 {
            return Err(ModelError::InvalidRegularization {
                alpha: regularization,
            });
        }

        let rows: Vec<Vec<f64>> = examples
            .iter()
            .map(|e| features_to_f64_vector(&e.features))
            .collect();
        let labels: Vec<i32> = examples.iter().map(|e| i32::from(e.elected)).collect();

        let x = DenseMatrix::from_2d_vec(&rows).map_err(|e| ModelError::FitFailed {
            reason: format!("Matrix creation failed: {}", e),
        })?;

        let params = LogisticRegressionParameters::default().with_alpha(regularization);
        let model: LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>> =
            LogisticRegression::fit(&x, &labels, params).map_err(|e| ModelError::FitFailed {
                reason: e.to_string(),
            })?;

        let fitted = model.coefficients();
        let mut coefficients = [0.0; FEATURE_COUNT];
        for (i, w) in coefficients.iter_mut().enumerate() {
            *w = *fitted.get((0, i));
        }
        let intercept = *model.intercept().get((0, 0));

        let weights = LogisticWeights {
            coefficients,
            intercept,
        };
        if weights.coefficients.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
            return Err(ModelError::FitFailed {
                reason: format!("Solver produced non-finite weights: {:?}", weights),
            });
        }

        debug!(
            "Fitted {} on {} examples (alpha={}): {:?}",
            label,
            examples.len(),
            regularization,
            weights
        );

        Ok(Self::from_weights(label, weights))
    }

    /// Builds a classifier from known weights, skipping the fit.
    pub fn from_weights(label: &str, weights: LogisticWeights) -> Self {
        Self {
            label: label.to_string(),
            weights,
        }
    }

    pub fn weights(&self) -> &LogisticWeights {
        &self.weights
    }
}

impl InductionClassifier for LogisticClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> f64 {
        logistic(self.weights.decision_function(features))
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn version(&self) -> &str {
        "logistic-l2-v1"
    }
}

fn validate_training_set(examples: &[TrainingExample]) -> Result<(), ModelError> {
    if examples.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }

    for (row, example) in examples.iter().enumerate() {
        let values = features_to_array(&example.features);
        for (&feature, value) in FEATURE_NAMES.iter().zip(values) {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteFeature {
                    feature,
                    row,
                    value,
                });
            }
        }
    }

    let elected = examples.iter().any(|e| e.elected);
    let passed_over = examples.iter().any(|e| !e.elected);
    if !(elected && passed_over) {
        return Err(ModelError::InsufficientClasses { found: 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::training_set::REFERENCE_TRAINING_SET;

    #[test]
    fn test_fit_separates_training_extremes() {
        let model = LogisticClassifier::fit("vote_model", &REFERENCE_TRAINING_SET, 1.0).unwrap();

        let strong = model.predict_proba(&FeatureVector::new(100.0, 180.0, 85.0));
        let weak = model.predict_proba(&FeatureVector::new(50.0, 90.0, 45.0));

        assert!(strong > weak, "strong={} weak={}", strong, weak);
        assert!((0.0..=1.0).contains(&strong));
        assert!((0.0..=1.0).contains(&weak));
    }

    #[test]
    fn test_independent_fits_are_identical() {
        let a = LogisticClassifier::fit("vote_model", &REFERENCE_TRAINING_SET, 1.0).unwrap();
        let b = LogisticClassifier::fit("prob_model", &REFERENCE_TRAINING_SET, 1.0).unwrap();
        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn test_single_class_is_rejected() {
        let examples = [
            TrainingExample::new(50.0, 90.0, 45.0, true),
            TrainingExample::new(65.0, 110.0, 55.0, true),
        ];
        let err = LogisticClassifier::fit("vote_model", &examples, 1.0).unwrap_err();
        assert!(matches!(err, ModelError::InsufficientClasses { found: 1 }));
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let err = LogisticClassifier::fit("vote_model", &[], 1.0).unwrap_err();
        assert!(matches!(err, ModelError::EmptyTrainingSet));
    }

    #[test]
    fn test_non_finite_feature_is_rejected() {
        let mut examples = REFERENCE_TRAINING_SET;
        examples[2].features.jaws = f64::NAN;

        let err = LogisticClassifier::fit("vote_model", &examples, 1.0).unwrap_err();
        match err {
            ModelError::NonFiniteFeature { feature, row, .. } => {
                assert_eq!(feature, "JAWS");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_regularization_is_rejected() {
        let err = LogisticClassifier::fit("vote_model", &REFERENCE_TRAINING_SET, -1.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidRegularization { .. }));
    }

    #[test]
    fn test_from_weights_prediction() {
        let model = LogisticClassifier::from_weights(
            "fixed",
            LogisticWeights {
                coefficients: [0.1, 0.0, 0.0],
                intercept: -7.0,
            },
        );

        // 0.1 * 70 - 7 = 0 -> exactly even odds
        let p = model.predict_proba(&FeatureVector::new(70.0, 0.0, 0.0));
        assert!((p - 0.5).abs() < 1e-12);
        assert_eq!(model.name(), "fixed");
    }
}
