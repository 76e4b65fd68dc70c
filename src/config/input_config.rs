//! Form input defaults parsing from environment variables.

use crate::domain::player::FeatureVector;
use anyhow::{Context, Result};
use std::env;

/// Values a blank form starts with, and the autofill fallback for any
/// career total a lookup could not provide.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDefaultsConfig {
    pub war: f64,
    pub hofm: f64,
    pub jaws: f64,
}

impl Default for InputDefaultsConfig {
    fn default() -> Self {
        Self {
            war: 65.0,
            hofm: 120.0,
            jaws: 55.0,
        }
    }
}

impl InputDefaultsConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            war: Self::parse_f64("HOF_DEFAULT_WAR", defaults.war)?,
            hofm: Self::parse_f64("HOF_DEFAULT_HOFM", defaults.hofm)?,
            jaws: Self::parse_f64("HOF_DEFAULT_JAWS", defaults.jaws)?,
        })
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(self.war, self.hofm, self.jaws)
    }

    fn parse_f64(key: &str, default: f64) -> Result<f64> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f64>()
            .context(format!("Failed to parse {}", key))
    }
}
