// Collaborator traits: the interfaces the suggestion core consumes.
//
// Implementors: InMemoryStore (JSON library file). A CMS-backed store
// would slot in behind the same traits. Methods are synchronous: the core
// is CPU-bound over already-fetched strings, so there is nothing to await.

use anyhow::Result;

use crate::config::Settings;

use super::models::{ContentKind, ContentSummary};

/// Read access to the content library.
pub trait ContentStore: Send + Sync {
    /// Up to `limit` most-recently-dated published items of the given
    /// kinds, newest first.
    fn list_eligible(&self, kinds: &[ContentKind], limit: usize) -> Result<Vec<ContentSummary>>;

    /// Tag names attached to an item (empty if none or unknown id).
    fn tag_names(&self, id: u64) -> Result<Vec<String>>;

    /// Category names attached to an item (empty if none or unknown id).
    fn category_names(&self, id: u64) -> Result<Vec<String>>;

    /// Hand-written excerpt for an item, when one exists.
    fn excerpt(&self, id: u64) -> Result<Option<String>>;

    /// Raw HTML body of an item, when the id exists.
    fn raw_content(&self, id: u64) -> Result<Option<String>>;
}

/// Access to the link suggestion settings record.
pub trait SettingsStore: Send + Sync {
    /// The settings as configured by the editor, already normalized.
    fn link_settings(&self) -> Result<Settings>;
}
