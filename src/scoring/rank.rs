// Ranker: zero-score drop, stable descending sort, top-N truncation.
//
// Equal scores keep their insertion order (Rust's sort_by is stable);
// there is deliberately no secondary tie-break key, so callers must not
// rely on any ordering among ties beyond that stability.

use std::cmp::Ordering;

use crate::store::models::ScoredCandidate;

/// Default cap on how many scored candidates survive ranking.
pub const MAX_RANKED: usize = 20;

/// Filter, sort, truncate.
pub fn rank(mut scored: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    scored.retain(|s| s.score > 0.0);
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}
