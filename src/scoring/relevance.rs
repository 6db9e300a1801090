// Relevance score formula.
//
// A candidate's relevance is the weighted sum of its field overlaps with
// the source content's token set:
//
//   score = 3.0 * overlap(title) + 2.0 * overlap(tags)
//         + 1.5 * overlap(excerpt) + 1.0 * overlap(categories)
//
// where overlap(field) is the fraction of the field's distinct tokens
// that also appear in the content. The weights encode that a title match
// says more about topical fit than a tag match, which says more than a
// category match; the excerpt sits between tags and categories.

use std::collections::HashSet;

use crate::store::models::Candidate;

/// Weight for title token overlap.
pub const TITLE_WEIGHT: f64 = 3.0;
/// Weight for tag token overlap.
pub const TAG_WEIGHT: f64 = 2.0;
/// Weight for excerpt token overlap.
pub const EXCERPT_WEIGHT: f64 = 1.5;
/// Weight for category token overlap.
pub const CATEGORY_WEIGHT: f64 = 1.0;

/// Fraction of `field`'s distinct tokens present in `content`, in
/// [0.0, 1.0]. An empty field scores 0.0, never a division by zero.
pub fn overlap(content: &HashSet<String>, field: &[String]) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = field.iter().map(String::as_str).collect();
    let shared = distinct.iter().filter(|t| content.contains(**t)).count();
    shared as f64 / distinct.len() as f64
}

/// The weighted relevance score of one candidate against the source
/// content's token set. Always >= 0; 0 means no field overlaps at all.
pub fn score_candidate(content: &HashSet<String>, candidate: &Candidate) -> f64 {
    TITLE_WEIGHT * overlap(content, &candidate.title_tokens)
        + TAG_WEIGHT * overlap(content, &candidate.tag_tokens)
        + EXCERPT_WEIGHT * overlap(content, &candidate.excerpt_tokens)
        + CATEGORY_WEIGHT * overlap(content, &candidate.category_tokens)
}

/// Multiply a score by an editorial boost factor.
///
/// A zero score stays exactly zero regardless of the factor; boosting
/// can amplify relevance but never manufacture it.
pub fn apply_boost(score: f64, factor: f64) -> f64 {
    if score == 0.0 {
        return 0.0;
    }
    score * factor
}
