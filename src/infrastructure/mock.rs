use crate::domain::player::{LookupOutcome, PlayerSummary, split_player_name};
use crate::domain::ports::PlayerStatsProvider;
use std::collections::HashMap;

/// In-memory lookup keyed by full player name.
#[derive(Debug, Clone, Default)]
pub struct MockPlayerStatsProvider {
    players: HashMap<String, PlayerSummary>,
}

impl MockPlayerStatsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, name: &str, summary: PlayerSummary) -> Self {
        self.players.insert(name.trim().to_string(), summary);
        self
    }
}

impl PlayerStatsProvider for MockPlayerStatsProvider {
    fn fetch_player_summary(&self, name: &str) -> LookupOutcome {
        if split_player_name(name).is_none() {
            return LookupOutcome::NotFound;
        }

        match self.players.get(name.trim()) {
            Some(summary) => LookupOutcome::Found(*summary),
            None => LookupOutcome::NotFound,
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
