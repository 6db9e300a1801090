// Phrase locator: finds the best anchor phrase for a candidate inside
// the source content.
//
// Already-linked text is off limits: whole <a>...</a> spans are removed
// before the scan, so a phrase that only occurs inside an existing link
// can never be suggested again. The scan itself is a greedy single-winner
// N-gram pass: every window of 2..=6 words is scored by how densely it
// overlaps the candidate's topic tokens, with a small bonus for longer,
// more specific phrases. O(words x window sizes), fine for article-sized
// inputs on a per-request basis.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenize::plain_text;

/// Shortest phrase worth linking.
pub const MIN_PHRASE_WORDS: usize = 2;
/// Longest phrase worth linking.
pub const MAX_PHRASE_WORDS: usize = 6;

/// Per-word length bonus in the window score. Tunable: higher values
/// favor longer anchors over denser ones.
const LENGTH_BONUS: f64 = 0.1;

/// A whole anchor element including its inner text.
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a>").unwrap());

/// A run of word characters, Unicode-aware.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Remove every anchor element and its inner text from `html`.
pub fn strip_links(html: &str) -> String {
    LINK_RE.replace_all(html, " ").into_owned()
}

/// Find the best 2-6 word phrase in `raw_content` that overlaps
/// `topic_tokens`, skipping text inside existing hyperlinks.
///
/// Returns the phrase in its original casing, or an empty string when no
/// window shares a word with the topic (including when `topic_tokens` is
/// empty or everything relevant is already linked).
pub fn find_best_phrase(
    raw_content: &str,
    topic_tokens: &[String],
    min_len: usize,
    max_len: usize,
) -> String {
    if topic_tokens.is_empty() {
        return String::new();
    }
    let topic: HashSet<&str> = topic_tokens.iter().map(String::as_str).collect();

    let unlinked = strip_links(raw_content);
    let text = plain_text(&unlinked);

    let words: Vec<&str> = WORD_RE.find_iter(&text).map(|m| m.as_str()).collect();
    if words.len() < min_len {
        return String::new();
    }
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    // Fixed iteration order (ascending length, then ascending start) plus
    // a strict > comparison makes the first-found window win ties.
    let mut best_score = 0.0_f64;
    let mut best_phrase: Option<String> = None;

    for len in min_len..=max_len.min(words.len()) {
        for start in 0..=(words.len() - len) {
            let shared = lowered[start..start + len]
                .iter()
                .filter(|w| topic.contains(w.as_str()))
                .count();
            if shared == 0 {
                continue;
            }
            let score = shared as f64 / len as f64 + len as f64 * LENGTH_BONUS;
            if score > best_score {
                best_score = score;
                best_phrase = Some(words[start..start + len].join(" "));
            }
        }
    }

    match best_phrase {
        Some(phrase) => {
            // Punctuation between window words means the joined phrase is
            // not literally present in the text; such a phrase can't be
            // rewritten into a link, so drop it.
            if text.to_lowercase().contains(&phrase.to_lowercase()) {
                phrase
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}
