// Induction models
pub mod ml;

// Prediction pipeline
pub mod prediction_service;

// Stats lookup workflow
pub mod autofill;

// Result rendering
pub mod report;
