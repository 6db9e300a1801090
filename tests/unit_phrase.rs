// Unit tests for the phrase locator.
//
// Covers the N-gram window scoring trade-off, link-span removal, the
// deterministic tie-break, and the exists-in-source property.

use interlink::phrase::{
    find_best_phrase, strip_links, MAX_PHRASE_WORDS, MIN_PHRASE_WORDS,
};
use interlink::tokenize::plain_text;

fn topics(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn locate(content: &str, topic: &[&str]) -> String {
    find_best_phrase(content, &topics(topic), MIN_PHRASE_WORDS, MAX_PHRASE_WORDS)
}

// ============================================================
// Window scoring
// ============================================================

#[test]
fn dense_exact_window_wins() {
    let phrase = locate(
        "filler filler wordpress seo checklist filler filler",
        &["wordpress", "seo", "checklist"],
    );
    // 3 shared of 3 words: 1.0 + 0.3 beats every diluted longer window
    assert_eq!(phrase, "wordpress seo checklist");
}

#[test]
fn length_bonus_prefers_longer_full_density_windows() {
    let phrase = locate(
        "intro wordpress seo checklist basics outro",
        &["wordpress", "seo", "checklist", "basics"],
    );
    // 4/4 + 0.4 = 1.4 beats 3/3 + 0.3 = 1.3
    assert_eq!(phrase, "wordpress seo checklist basics");
}

#[test]
fn single_shared_word_still_anchors_a_two_word_phrase() {
    let phrase = locate("all about caching today", &["caching"]);
    // Best 2-word window containing the shared word, first found
    assert_eq!(phrase, "about caching");
}

#[test]
fn ties_go_to_the_first_window_in_scan_order() {
    let phrase = find_best_phrase(
        "alpha seo middle words ranking omega",
        &topics(&["seo", "ranking"]),
        2,
        2,
    );
    assert_eq!(phrase, "alpha seo");
}

#[test]
fn original_casing_is_returned() {
    let phrase = locate("Read the WordPress SEO Checklist now", &["wordpress", "seo", "checklist"]);
    assert_eq!(phrase, "WordPress SEO Checklist");
}

// ============================================================
// Link-span removal (no double-linking)
// ============================================================

#[test]
fn fully_linked_match_returns_empty() {
    let phrase = locate(
        r#"Visit <a href="/x">WordPress SEO</a> for plugins"#,
        &["wordpress", "seo"],
    );
    assert_eq!(phrase, "");
}

#[test]
fn linked_span_inner_text_never_leaks() {
    let content = r#"<a href="/a" class="ref">deep caching internals</a> plus other topics"#;
    let stripped = strip_links(content);
    assert!(!stripped.contains("deep caching internals"));
    assert_eq!(locate(content, &["caching"]), "");
}

#[test]
fn unlinked_second_occurrence_is_found() {
    let content = r#"<a href="/x">caching guide</a>; see the caching guide appendix"#;
    let phrase = locate(content, &["caching", "guide"]);
    assert_eq!(phrase, "caching guide");
}

// ============================================================
// Contracts and edge cases
// ============================================================

#[test]
fn empty_topic_tokens_return_empty() {
    assert_eq!(locate("plenty of source text here", &[]), "");
}

#[test]
fn no_overlap_returns_empty() {
    assert_eq!(locate("gardening notes for spring", &["kubernetes"]), "");
}

#[test]
fn input_shorter_than_min_window_returns_empty() {
    assert_eq!(locate("caching", &["caching"]), "");
    assert_eq!(locate("", &["caching"]), "");
}

#[test]
fn punctuation_between_words_fails_the_recheck() {
    // The window joins to "WordPress SEO", which does not literally occur
    // in "WordPress, SEO", so the defensive re-check must reject it
    let phrase = locate("WordPress, SEO tips", &["wordpress", "seo"]);
    assert_eq!(phrase, "");
}

#[test]
fn returned_phrase_always_occurs_in_stripped_text() {
    let samples = [
        "<p>Good caching strategies make sites faster.</p>",
        "Learn <em>plugin development</em> step by step",
        r#"old <a href="/x">link text</a> but plugin development continues"#,
    ];
    for content in samples {
        let phrase = locate(content, &["caching", "strategies", "plugin", "development"]);
        if !phrase.is_empty() {
            let text = plain_text(&strip_links(content)).to_lowercase();
            assert!(
                text.contains(&phrase.to_lowercase()),
                "phrase {phrase:?} not in stripped text of {content:?}"
            );
        }
    }
}
