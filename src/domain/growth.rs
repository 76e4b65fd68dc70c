//! Year-over-year vote share projection.

/// Number of ballot years in a projected trend, including the starting year.
pub const TREND_HORIZON: usize = 10;

const BASE_GROWTH: f64 = 0.05;
const HEADROOM_GROWTH: f64 = 0.08;
const VOTE_CAP: f64 = 100.0;

/// Projects a vote share forward over [`TREND_HORIZON`] ballot years.
///
/// Each step grows by `0.05 + 0.08 * (1 - v / 100)`, so growth slows as the
/// share approaches 100, and is then capped at 100. The starting value is
/// returned untouched and negative values are never floored.
pub fn project(start_vote: f64) -> Vec<f64> {
    let mut votes = Vec::with_capacity(TREND_HORIZON);
    votes.push(start_vote);

    let mut current = start_vote;
    for _ in 1..TREND_HORIZON {
        let increment = BASE_GROWTH + HEADROOM_GROWTH * (1.0 - current / VOTE_CAP);
        current = (current * (1.0 + increment)).min(VOTE_CAP);
        votes.push(current);
    }

    votes
}
