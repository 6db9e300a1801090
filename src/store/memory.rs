// In-memory content store backed by a JSON library file.
//
// The library file bundles the settings record and the content items so a
// whole demo site fits in one document. Items live behind a RwLock so the
// upsert path (content saves) can run alongside suggestion requests.

use std::path::Path;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::Settings;

use super::models::{ContentItem, ContentKind, ContentStatus, ContentSummary};
use super::traits::{ContentStore, SettingsStore};

/// On-disk shape of the library file.
#[derive(Debug, Serialize, Deserialize)]
struct Library {
    #[serde(default)]
    settings: Settings,
    items: Vec<ContentItem>,
}

/// Content store holding the whole library in memory.
pub struct InMemoryStore {
    inner: RwLock<Library>,
}

impl InMemoryStore {
    /// Load a library from a JSON file. Settings are normalized here, at
    /// the load boundary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content library at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse content library at {}", path.display()))
    }

    /// Build a store from a JSON string (used by tests and embedders).
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut library: Library = serde_json::from_str(raw)?;
        library.settings.normalize();
        Ok(Self {
            inner: RwLock::new(library),
        })
    }

    /// Build an empty store with the given settings (already normalized
    /// by the caller or defaulted).
    pub fn with_settings(mut settings: Settings) -> Self {
        settings.normalize();
        Self {
            inner: RwLock::new(Library {
                settings,
                items: Vec::new(),
            }),
        }
    }

    /// Insert or replace a content item by id.
    ///
    /// Callers that hold a candidate pool cache must invalidate it after
    /// this returns; the store has no back-channel to the cache.
    pub fn upsert(&self, item: ContentItem) {
        let mut library = self.inner.write();
        match library.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => library.items.push(item),
        }
    }

    /// Total number of items, published or not.
    pub fn item_count(&self) -> usize {
        self.inner.read().items.len()
    }

    /// Number of published items of the given kind.
    pub fn published_count(&self, kind: ContentKind) -> usize {
        self.inner
            .read()
            .items
            .iter()
            .filter(|i| i.kind == kind && i.status == ContentStatus::Published)
            .count()
    }

    /// Title of an item, for display purposes.
    pub fn title(&self, id: u64) -> Option<String> {
        self.inner
            .read()
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.title.clone())
    }
}

impl ContentStore for InMemoryStore {
    fn list_eligible(&self, kinds: &[ContentKind], limit: usize) -> Result<Vec<ContentSummary>> {
        let library = self.inner.read();
        let mut eligible: Vec<ContentSummary> = library
            .items
            .iter()
            .filter(|i| i.status == ContentStatus::Published && kinds.contains(&i.kind))
            .map(|i| ContentSummary {
                id: i.id,
                title: i.title.clone(),
                url: i.url.clone(),
                date: i.date,
            })
            .collect();
        eligible.sort_by(|a, b| b.date.cmp(&a.date));
        eligible.truncate(limit);
        Ok(eligible)
    }

    fn tag_names(&self, id: u64) -> Result<Vec<String>> {
        let library = self.inner.read();
        Ok(library
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.tags.clone())
            .unwrap_or_default())
    }

    fn category_names(&self, id: u64) -> Result<Vec<String>> {
        let library = self.inner.read();
        Ok(library
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.categories.clone())
            .unwrap_or_default())
    }

    fn excerpt(&self, id: u64) -> Result<Option<String>> {
        let library = self.inner.read();
        Ok(library
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.excerpt.clone())
            .filter(|e| !e.is_empty()))
    }

    fn raw_content(&self, id: u64) -> Result<Option<String>> {
        let library = self.inner.read();
        Ok(library
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.content.clone()))
    }
}

impl SettingsStore for InMemoryStore {
    fn link_settings(&self) -> Result<Settings> {
        Ok(self.inner.read().settings.clone())
    }
}
