//! Configuration module for hof-predictor.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Model, Input defaults, and Lookup sources.

mod input_config;
mod lookup_config;
mod model_config;

pub use input_config::InputDefaultsConfig;
pub use lookup_config::LookupEnvConfig;
pub use model_config::{DEFAULT_REGULARIZATION, ModelEnvConfig};

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub model: ModelEnvConfig,
    pub defaults: InputDefaultsConfig,
    pub lookup: LookupEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model = ModelEnvConfig::from_env().context("Failed to load model config")?;
        let defaults =
            InputDefaultsConfig::from_env().context("Failed to load input defaults")?;
        let lookup = LookupEnvConfig::from_env();

        Ok(Self {
            model,
            defaults,
            lookup,
        })
    }
}
