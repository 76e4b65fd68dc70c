use serde::{Deserialize, Serialize};

/// Career value metrics fed to the classifiers, in model column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Wins Above Replacement
    pub war: f64,
    /// Hall of Fame Monitor score
    pub hofm: f64,
    /// Jaffe WAR Score
    pub jaws: f64,
}

impl FeatureVector {
    pub const fn new(war: f64, hofm: f64, jaws: f64) -> Self {
        Self { war, hofm, jaws }
    }
}

/// A labeled row of the training set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingExample {
    pub features: FeatureVector,
    pub elected: bool,
}

impl TrainingExample {
    pub const fn new(war: f64, hofm: f64, jaws: f64, elected: bool) -> Self {
        Self {
            features: FeatureVector::new(war, hofm, jaws),
            elected,
        }
    }
}

/// Subjective adjustments applied on top of the statistical estimate.
///
/// Expected ranges: `leadership` and `influence` in [0, 1], `era_adjust`
/// in [-0.3, 0.3]. The core trusts the caller to respect them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalFactors {
    pub doping: bool,
    pub leadership: f64,
    pub influence: f64,
    pub era_adjust: f64,
}

impl Default for ExternalFactors {
    fn default() -> Self {
        Self {
            doping: false,
            leadership: 0.5,
            influence: 0.5,
            era_adjust: 0.0,
        }
    }
}

/// Career totals returned by a stats lookup. Absent fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub war: Option<f64>,
    pub hofm: Option<f64>,
    pub jaws: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LookupOutcome {
    Found(PlayerSummary),
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Splits a display name into `(first, last)` on the first space.
///
/// Returns `None` for single-token names, which no lookup can resolve.
pub fn split_player_name(name: &str) -> Option<(&str, &str)> {
    let (first, last) = name.trim().split_once(' ')?;
    let last = last.trim();
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some((first, last))
}
