// Link application: rewrite the first unlinked occurrence of a chosen
// phrase into an anchor.
//
// This is the editing action the suggestion list feeds: the suggestion
// itself is never persisted, the rewrite is. Occurrences inside existing
// anchors or inside tag markup are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Wrap the first linkable occurrence of `phrase` in `raw_content` with
/// an anchor to `url`. Case-insensitive match; the original casing of the
/// matched text is kept. Returns None when every occurrence is already
/// linked, sits inside markup, or the phrase does not occur at all.
pub fn link_phrase(raw_content: &str, phrase: &str, url: &str) -> Option<String> {
    if phrase.is_empty() {
        return None;
    }

    let blocked: Vec<(usize, usize)> = LINK_RE
        .find_iter(raw_content)
        .chain(TAG_RE.find_iter(raw_content))
        .map(|m| (m.start(), m.end()))
        .collect();

    let haystack = raw_content.to_lowercase();
    let needle = phrase.to_lowercase();

    // Lowercasing can change byte lengths in exotic cases; bail to a miss
    // rather than splice at a wrong offset.
    if haystack.len() != raw_content.len() {
        return None;
    }

    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let inside_markup = blocked.iter().any(|&(s, e)| start < e && end > s);
        if !inside_markup && raw_content.is_char_boundary(start) && raw_content.is_char_boundary(end)
        {
            let original = &raw_content[start..end];
            let mut rewritten = String::with_capacity(raw_content.len() + url.len() + 16);
            rewritten.push_str(&raw_content[..start]);
            rewritten.push_str(&format!(r#"<a href="{url}">{original}</a>"#));
            rewritten.push_str(&raw_content[end..]);
            return Some(rewritten);
        }
        from = start + 1;
    }
    None
}
