//! Input widget ranges.
//!
//! The prediction core accepts any finite numbers; the presentation layer
//! keeps user input inside the ranges a form would allow.

use crate::domain::player::{ExternalFactors, FeatureVector};
use std::ops::RangeInclusive;

pub const WAR_RANGE: RangeInclusive<f64> = 0.0..=150.0;
pub const HOFM_RANGE: RangeInclusive<f64> = 0.0..=300.0;
pub const JAWS_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const LEADERSHIP_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const INFLUENCE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const ERA_ADJUST_RANGE: RangeInclusive<f64> = -0.3..=0.3;

fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

pub fn clamp_features(fv: FeatureVector) -> FeatureVector {
    FeatureVector {
        war: clamp_to(fv.war, &WAR_RANGE),
        hofm: clamp_to(fv.hofm, &HOFM_RANGE),
        jaws: clamp_to(fv.jaws, &JAWS_RANGE),
    }
}

pub fn clamp_factors(factors: ExternalFactors) -> ExternalFactors {
    ExternalFactors {
        doping: factors.doping,
        leadership: clamp_to(factors.leadership, &LEADERSHIP_RANGE),
        influence: clamp_to(factors.influence, &INFLUENCE_RANGE),
        era_adjust: clamp_to(factors.era_adjust, &ERA_ADJUST_RANGE),
    }
}
