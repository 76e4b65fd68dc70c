use crate::domain::player::FeatureVector;

/// Interface for fitted induction models
pub trait InductionClassifier: Send + Sync {
    /// Probability (0.0 to 1.0) that a player with these career numbers
    /// is elected
    fn predict_proba(&self, features: &FeatureVector) -> f64;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
