use crate::domain::player::LookupOutcome;

/// Source of career totals for the autofill workflow.
///
/// Implementations must never fail loudly: anything that prevents a lookup
/// (unparseable name, unknown player, missing seasons) is `NotFound`.
pub trait PlayerStatsProvider: Send + Sync {
    fn fetch_player_summary(&self, name: &str) -> LookupOutcome;

    /// Get provider name
    fn name(&self) -> &str;
}
