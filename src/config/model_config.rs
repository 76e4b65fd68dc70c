//! Model configuration parsing from environment variables.
//!
//! Both classifiers are fitted from the same `ModelEnvConfig`, so they can
//! never diverge through different solver settings.

use anyhow::{Context, Result};
use std::env;

/// Matches a default-regularised logistic regression (inverse strength 1.0)
pub const DEFAULT_REGULARIZATION: f64 = 1.0;

/// Model environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    /// L2 penalty on the coefficients; 0 disables regularisation
    pub regularization: f64,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            regularization: DEFAULT_REGULARIZATION,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let regularization = env::var("HOF_MODEL_REGULARIZATION")
            .unwrap_or_else(|_| DEFAULT_REGULARIZATION.to_string())
            .parse::<f64>()
            .context("Failed to parse HOF_MODEL_REGULARIZATION")?;

        if !regularization.is_finite() || regularization < 0.0 {
            anyhow::bail!(
                "Invalid HOF_MODEL_REGULARIZATION: {}. Must be a finite value >= 0",
                regularization
            );
        }

        Ok(Self { regularization })
    }
}
