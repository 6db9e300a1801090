// Stop-word sets per language, built once from the stop-words crate.
//
// The crate's lists cover the common function words (articles,
// conjunctions, prepositions, pronouns, auxiliaries) the tokenizer must
// drop. Lookups are against a HashSet so per-word filtering is O(1).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use stop_words::{get, LANGUAGE};

use crate::config::Language;

static ENGLISH: Lazy<HashSet<String>> = Lazy::new(|| get(LANGUAGE::English).into_iter().collect());

static GERMAN: Lazy<HashSet<String>> = Lazy::new(|| get(LANGUAGE::German).into_iter().collect());

/// The stop-word set for a language.
pub fn set(language: Language) -> &'static HashSet<String> {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
    }
}
