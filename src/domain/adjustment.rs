//! External-factor adjustment applied to raw model outputs.

use super::player::ExternalFactors;

pub const DOPING_PENALTY: f64 = -0.35;
pub const LEADERSHIP_WEIGHT: f64 = 0.15;
pub const INFLUENCE_WEIGHT: f64 = 0.2;
pub const ERA_WEIGHT: f64 = 0.1;

/// Combines the external inputs into one multiplicative factor.
///
/// For in-range inputs the result lies in [-0.38, 0.38]: the doping penalty
/// plus at most 0.03 from the era term on the low side, and the three
/// positive weights on the high side.
pub fn ext_factor(factors: &ExternalFactors) -> f64 {
    let doping = if factors.doping { DOPING_PENALTY } else { 0.0 };
    doping
        + factors.leadership * LEADERSHIP_WEIGHT
        + factors.influence * INFLUENCE_WEIGHT
        + factors.era_adjust * ERA_WEIGHT
}

/// Scales a vote share (0..100) by the factor and clamps it back into range.
pub fn adjust_vote(basic_vote: f64, ext_factor: f64) -> f64 {
    (basic_vote * (1.0 + ext_factor)).clamp(0.0, 100.0)
}

/// Scales a probability (0..1) by the factor and clamps it back into range.
pub fn adjust_prob(basic_prob: f64, ext_factor: f64) -> f64 {
    (basic_prob * (1.0 + ext_factor)).clamp(0.0, 1.0)
}
