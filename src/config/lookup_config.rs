//! Player lookup source configuration parsing from environment variables.

use std::env;
use std::path::{Path, PathBuf};

/// Lookup sources. Autofill is only available when both tables are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupEnvConfig {
    pub register_csv: Option<PathBuf>,
    pub batting_csv: Option<PathBuf>,
}

impl LookupEnvConfig {
    pub fn from_env() -> Self {
        Self {
            register_csv: Self::optional_path("HOF_REGISTER_CSV"),
            batting_csv: Self::optional_path("HOF_BATTING_CSV"),
        }
    }

    /// `(register, batting)` when both tables are configured
    pub fn sources(&self) -> Option<(&Path, &Path)> {
        match (&self.register_csv, &self.batting_csv) {
            (Some(register), Some(batting)) => Some((register.as_path(), batting.as_path())),
            _ => None,
        }
    }

    fn optional_path(key: &str) -> Option<PathBuf> {
        env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
