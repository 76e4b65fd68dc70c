//! Human-readable rendering of a prediction.

use crate::domain::prediction::PredictionResult;

pub const BASIC_VOTE_LABEL: &str = "Baseline vote share";
pub const FINAL_VOTE_LABEL: &str = "Adjusted vote share (external factors)";
pub const BASIC_PROB_LABEL: &str = "Induction probability (stats only)";
pub const FINAL_PROB_LABEL: &str = "Final induction probability (external factors)";
pub const TREND_LABEL: &str = "Projected vote share by year";

/// Renders the fixed multi-line report. Every number has one decimal;
/// probabilities are shown as percentages.
pub fn format_result(result: &PredictionResult) -> String {
    let trend = result
        .vote_trend
        .iter()
        .map(|v| format!("{:.1}", v))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{name} - Hall of Fame prediction\n\
         \n\
         {BASIC_VOTE_LABEL}: {basic_vote:.1}%\n\
         {FINAL_VOTE_LABEL}: {final_vote:.1}%\n\
         {BASIC_PROB_LABEL}: {basic_prob:.1}%\n\
         {FINAL_PROB_LABEL}: {final_prob:.1}%\n\
         \n\
         {TREND_LABEL}: [{trend}]",
        name = result.name,
        basic_vote = result.basic_vote,
        final_vote = result.final_vote,
        basic_prob = result.basic_prob * 100.0,
        final_prob = result.final_prob * 100.0,
    )
}
