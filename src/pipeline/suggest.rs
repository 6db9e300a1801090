// End-to-end suggestion pipeline.
//
// tokenize source -> candidate pool (minus self) -> exclusion filter ->
// score + boost -> rank -> locate an anchor phrase per survivor, in score
// order, until 10 suggestions are collected. High scorers without a
// locatable phrase are skipped, so the result stays in descending score
// order post-filter.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Settings;
use crate::phrase::{find_best_phrase, MAX_PHRASE_WORDS, MIN_PHRASE_WORDS};
use crate::pool::{filter_excluded, PoolBuilder};
use crate::scoring::{apply_boost, rank, score_candidate};
use crate::store::models::{Candidate, ScoredCandidate, Suggestion};
use crate::tokenize::tokenize;

/// Cap on suggestions returned per analysis request.
pub const MAX_SUGGESTIONS: usize = 10;

/// Run the full pipeline for one source item.
///
/// Returns an empty list both when the source has no analyzable text and
/// when nothing in the pool matches; the calling layer distinguishes the
/// two for its status message, the core does not.
pub fn run(
    pool_builder: &PoolBuilder,
    settings: &Settings,
    source_id: u64,
    raw_content: &str,
) -> Result<Vec<Suggestion>> {
    let content_tokens = tokenize(raw_content, settings.language);
    if content_tokens.is_empty() {
        debug!(source_id, "Source content yields no tokens, skipping analysis");
        return Ok(Vec::new());
    }
    let content: HashSet<String> = content_tokens.into_iter().collect();

    let candidates = pool_builder.pool(source_id, settings.language)?;
    let candidates = filter_excluded(candidates, &settings.excluded_ids);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let boosts = settings.boost_map();
    let scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let base = score_candidate(&content, &candidate);
            let (score, boosted) = match boosts.get(&candidate.id) {
                Some(&factor) => (apply_boost(base, factor), factor > 1.0 && base > 0.0),
                None => (base, false),
            };
            ScoredCandidate {
                candidate,
                score,
                boosted,
            }
        })
        .collect();

    let ranked = rank(scored, settings.max_candidates);

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    for entry in ranked {
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
        let topic = topic_tokens(&entry.candidate);
        let phrase = find_best_phrase(raw_content, &topic, MIN_PHRASE_WORDS, MAX_PHRASE_WORDS);
        if phrase.is_empty() {
            debug!(
                candidate_id = entry.candidate.id,
                score = entry.score,
                "No anchor phrase located, skipping candidate"
            );
            continue;
        }
        suggestions.push(Suggestion {
            phrase,
            candidate_id: entry.candidate.id,
            title: entry.candidate.title,
            url: entry.candidate.url,
            score: entry.score,
            boosted: entry.boosted,
        });
    }

    info!(source_id, suggestions = suggestions.len(), "Analysis complete");
    Ok(suggestions)
}

/// A candidate's topic identity for anchor matching: title plus tag
/// tokens, deduplicated, order preserved. Categories are left out: they
/// are broad taxonomy labels and anchor poorly.
fn topic_tokens(candidate: &Candidate) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut topic = Vec::new();
    for token in candidate.title_tokens.iter().chain(candidate.tag_tokens.iter()) {
        if seen.insert(token.as_str()) {
            topic.push(token.clone());
        }
    }
    topic
}
