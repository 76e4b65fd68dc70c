pub mod logistic_classifier;
pub mod predictor;
