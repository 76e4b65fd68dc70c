// Player inputs and lookup results
pub mod player;

// Prediction requests and results
pub mod prediction;

// Pure transforms
pub mod adjustment;
pub mod growth;

// Model inputs and reference data
pub mod ml;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
