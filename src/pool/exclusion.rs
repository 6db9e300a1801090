// Exclusion filter: strips editor-blacklisted candidates before scoring.

use std::collections::HashSet;

use crate::store::models::Candidate;

/// Remove candidates whose id is in `excluded`. Pure; preserves the order
/// of the survivors and returns a contiguous Vec.
pub fn filter_excluded(candidates: Vec<Candidate>, excluded: &HashSet<u64>) -> Vec<Candidate> {
    if excluded.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|c| !excluded.contains(&c.id))
        .collect()
}
