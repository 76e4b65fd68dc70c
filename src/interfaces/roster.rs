//! Roster files for batch predictions.
//!
//! ```toml
//! [[player]]
//! name = "Joe Mauer"
//! war = 55.2
//! hofm = 118
//! jaws = 47.1
//! leadership = 0.7
//! ```
//!
//! Factor fields may be omitted and take the form defaults.

use super::input_ranges::{clamp_factors, clamp_features};
use crate::domain::player::{ExternalFactors, FeatureVector};
use crate::domain::prediction::PredictionRequest;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub war: f64,
    pub hofm: f64,
    pub jaws: f64,
    #[serde(default)]
    pub doping: bool,
    #[serde(default = "default_half")]
    pub leadership: f64,
    #[serde(default = "default_half")]
    pub influence: f64,
    #[serde(default)]
    pub era_adjust: f64,
}

fn default_half() -> f64 {
    0.5
}

impl RosterEntry {
    /// Rejects NaN and infinite numbers, which range clamping would let through.
    fn validate(&self) -> Result<()> {
        let numbers = [
            ("war", self.war),
            ("hofm", self.hofm),
            ("jaws", self.jaws),
            ("leadership", self.leadership),
            ("influence", self.influence),
            ("era_adjust", self.era_adjust),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                bail!("Player {:?}: {} must be a finite number, got {}", self.name, field, value);
            }
        }
        Ok(())
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            name: self.name.clone(),
            features: clamp_features(FeatureVector::new(self.war, self.hofm, self.jaws)),
            factors: clamp_factors(ExternalFactors {
                doping: self.doping,
                leadership: self.leadership,
                influence: self.influence,
                era_adjust: self.era_adjust,
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    #[serde(default, rename = "player")]
    pub players: Vec<RosterEntry>,
}

impl Roster {
    pub fn parse(content: &str) -> Result<Self> {
        let roster: Self = toml::from_str(content).context("Failed to parse roster TOML")?;
        for entry in &roster.players {
            entry.validate()?;
        }
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {:?}", path))?;
        let roster = Self::parse(&content)?;
        info!("Loaded {} players from {:?}", roster.players.len(), path);
        Ok(roster)
    }

    pub fn requests(&self) -> Vec<PredictionRequest> {
        self.players.iter().map(RosterEntry::to_request).collect()
    }
}
