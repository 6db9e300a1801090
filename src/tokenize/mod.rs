// Tokenizer: turns raw HTML content into normalized topic words.
//
// Pipeline: strip markup -> lowercase -> split on non-word runs ->
// drop words of 2 chars or fewer -> drop stop words for the language.
// Output preserves input order and is not deduplicated; consumers that
// need set semantics build their own set.

pub mod stopwords;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Language;

/// Any markup tag, including across newlines.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// A run of word characters. The full regex engine keeps this
/// Unicode-aware, so accented letters stay inside words.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Strip all markup from `html` and collapse whitespace runs, preserving
/// the original casing and word order. Tags are replaced with a space so
/// adjacent elements don't fuse into one word.
pub fn plain_text(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize `text` (raw HTML or plain) into normalized topic words.
///
/// Empty, whitespace-only, or markup-only input yields an empty Vec,
/// never an error.
pub fn tokenize(text: &str, language: Language) -> Vec<String> {
    let plain = plain_text(text);
    if plain.is_empty() {
        return Vec::new();
    }
    let lowered = plain.to_lowercase();
    let stops = stopwords::set(language);

    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| word.chars().count() > 2)
        .filter(|word| !stops.contains(word.as_str()))
        .collect()
}
