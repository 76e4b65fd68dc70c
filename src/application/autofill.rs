use crate::domain::player::{FeatureVector, LookupOutcome};
use crate::domain::ports::PlayerStatsProvider;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutofillOutcome {
    /// Lookup succeeded; fields it could not provide fell back to defaults
    Filled(FeatureVector),
    /// Lookup failed; the current inputs are returned untouched
    Unavailable(FeatureVector),
}

impl AutofillOutcome {
    pub fn features(&self) -> FeatureVector {
        match self {
            AutofillOutcome::Filled(fv) | AutofillOutcome::Unavailable(fv) => *fv,
        }
    }
}

/// Fills the career-total inputs from a stats lookup.
pub struct AutofillService {
    provider: Arc<dyn PlayerStatsProvider>,
    defaults: FeatureVector,
}

impl AutofillService {
    pub fn new(provider: Arc<dyn PlayerStatsProvider>, defaults: FeatureVector) -> Self {
        Self { provider, defaults }
    }

    pub fn autofill(&self, name: &str, current: FeatureVector) -> AutofillOutcome {
        match self.provider.fetch_player_summary(name) {
            LookupOutcome::Found(summary) => {
                let filled = FeatureVector {
                    war: summary.war.unwrap_or(self.defaults.war),
                    hofm: summary.hofm.unwrap_or(self.defaults.hofm),
                    jaws: summary.jaws.unwrap_or(self.defaults.jaws),
                };
                info!(
                    "Autofilled {} from {}: WAR={:.1} HOFm={:.1} JAWS={:.1}",
                    name,
                    self.provider.name(),
                    filled.war,
                    filled.hofm,
                    filled.jaws
                );
                AutofillOutcome::Filled(filled)
            }
            LookupOutcome::NotFound => {
                warn!(
                    "No career record for {:?} in {}; keeping current inputs",
                    name,
                    self.provider.name()
                );
                AutofillOutcome::Unavailable(current)
            }
        }
    }
}
