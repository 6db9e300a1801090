// Scoring: weighted token-overlap relevance and top-N ranking.

pub mod rank;
pub mod relevance;

pub use rank::{rank, MAX_RANKED};
pub use relevance::{apply_boost, overlap, score_candidate};
