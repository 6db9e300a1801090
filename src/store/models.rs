// Data models: the types that flow through the suggestion pipeline.
//
// These are separate from the store implementations so the scoring and
// phrase modules can use them without depending on any backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content item. Which kinds are eligible as link targets is a
/// settings concern; the store just records what each item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Page,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Page => "page",
        }
    }
}

/// Publication status. Only published items are eligible link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Draft,
    Private,
}

/// A full content item as stored in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub kind: ContentKind,
    pub status: ContentStatus,
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
    /// Raw HTML body
    pub content: String,
}

/// The slim listing row returned by `ContentStore::list_eligible`; tag and
/// category names are fetched per item, mirroring how a CMS keeps taxonomy
/// terms outside the post record.
#[derive(Debug, Clone)]
pub struct ContentSummary {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// One potential link target, with each text field tokenized once at
/// pool-build time. Token lists reflect the language the pool was built
/// with; the pool cache records that language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub title_tokens: Vec<String>,
    pub tag_tokens: Vec<String>,
    pub category_tokens: Vec<String>,
    pub excerpt_tokens: Vec<String>,
}

/// A candidate with its relevance score attached.
///
/// `boosted` is true only when an editorial boost actually raised the
/// score; a zero base score stays zero no matter the factor.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
    pub boosted: bool,
}

/// A final link suggestion: the anchor phrase found in the source content
/// and the target it should point at. Created per analysis request, never
/// persisted; the caller serializes these to its transport format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub phrase: String,
    pub candidate_id: u64,
    pub title: String,
    pub url: String,
    pub score: f64,
    pub boosted: bool,
}
