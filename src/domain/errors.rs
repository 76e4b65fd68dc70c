use thiserror::Error;

/// Errors raised while fitting the induction classifiers.
///
/// Any of these at startup is fatal: the service cannot be built without a
/// fitted model pair.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Training set needs at least two distinct labels, found {found}")]
    InsufficientClasses { found: usize },

    #[error("Non-numeric value in feature column {feature} at row {row}: {value}")]
    NonFiniteFeature {
        feature: &'static str,
        row: usize,
        value: f64,
    },

    #[error("Invalid regularization strength {alpha}: must be finite and >= 0")]
    InvalidRegularization { alpha: f64 },

    #[error("Model fit failed: {reason}")]
    FitFailed { reason: String },
}

/// Errors raised while loading a player lookup source.
///
/// Lookups themselves never fail; a source that cannot be loaded simply
/// disables autofill.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to open {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Malformed record in {source_name}: {reason}")]
    MalformedRecord { source_name: String, reason: String },
}
