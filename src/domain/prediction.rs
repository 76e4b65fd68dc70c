use super::player::{ExternalFactors, FeatureVector};
use serde::{Deserialize, Serialize};

/// Everything needed for one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub name: String,
    pub features: FeatureVector,
    pub factors: ExternalFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub name: String,
    /// Model vote share, 0..100
    pub basic_vote: f64,
    /// Vote share after external factors, 0..100
    pub final_vote: f64,
    /// Model induction probability, 0..1
    pub basic_prob: f64,
    /// Induction probability after external factors, 0..1
    pub final_prob: f64,
    /// Projected vote share per ballot year, starting at `final_vote`
    pub vote_trend: Vec<f64>,
}
