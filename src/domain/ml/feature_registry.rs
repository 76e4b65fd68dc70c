use crate::domain::player::FeatureVector;

/// Ordered list of model input columns.
/// This order MUST match the coefficient order of a fitted model.
pub const FEATURE_NAMES: &[&str] = &["WAR", "HOFm", "JAWS"];

pub const FEATURE_COUNT: usize = 3;

/// Converts a feature triple into the model's column order.
pub fn features_to_array(fv: &FeatureVector) -> [f64; FEATURE_COUNT] {
    [fv.war, fv.hofm, fv.jaws]
}

/// Same as [`features_to_array`], as a row for smartcore's matrix builders.
pub fn features_to_f64_vector(fv: &FeatureVector) -> Vec<f64> {
    features_to_array(fv).to_vec()
}
