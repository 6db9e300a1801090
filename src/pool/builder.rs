// Candidate pool builder: assembles and caches the linkable universe.
//
// On a cache hit the stored pool is returned minus the item under
// analysis. On a miss the builder queries the content store for the most
// recent published items, tokenizes title/tags/categories/excerpt per
// item, and writes the pool back to the cache.
//
// Invalidation is explicit: the calling layer clears the cache whenever a
// content item is created or updated. Until that save fires, requests may
// see a slightly outdated snapshot; accepted.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Language;
use crate::store::models::{Candidate, ContentKind};
use crate::store::traits::ContentStore;
use crate::tokenize::tokenize;

use super::cache::{CachedPool, PoolCache};

/// Fixed cache key for the candidate pool.
pub const POOL_CACHE_KEY: &str = "interlink_candidate_pool";

/// Most-recent item cap when building the pool.
pub const POOL_LIMIT: usize = 500;

/// Reference TTL for the cached pool. Explicit invalidation on content
/// saves is the primary freshness mechanism; the TTL bounds staleness
/// when no save ever fires.
pub const POOL_TTL: Duration = Duration::from_secs(3600);

/// Builds candidate pools from a content store, caching the result.
pub struct PoolBuilder<'a> {
    store: &'a dyn ContentStore,
    cache: &'a dyn PoolCache,
    kinds: Vec<ContentKind>,
}

impl<'a> PoolBuilder<'a> {
    pub fn new(store: &'a dyn ContentStore, cache: &'a dyn PoolCache, kinds: Vec<ContentKind>) -> Self {
        Self { store, cache, kinds }
    }

    /// The candidate pool for one analysis request, excluding the item
    /// being analyzed. A cached pool built for a different language is
    /// treated as a miss and rebuilt.
    pub fn pool(&self, exclude_id: u64, language: Language) -> Result<Vec<Candidate>> {
        if let Some(cached) = self.cache.get(POOL_CACHE_KEY) {
            if cached.language == language {
                debug!(candidates = cached.candidates.len(), "Candidate pool cache hit");
                return Ok(without(cached.candidates, exclude_id));
            }
            debug!(
                cached = cached.language.as_str(),
                requested = language.as_str(),
                "Cached pool language mismatch, rebuilding"
            );
        }

        let candidates = self.build(language)?;
        self.cache.set(
            POOL_CACHE_KEY,
            CachedPool {
                language,
                candidates: candidates.clone(),
            },
            Some(POOL_TTL),
        );
        Ok(without(candidates, exclude_id))
    }

    /// Drop the cached pool. Call on every content create or update.
    pub fn invalidate(&self) {
        self.cache.delete(POOL_CACHE_KEY);
        info!("Candidate pool cache invalidated");
    }

    fn build(&self, language: Language) -> Result<Vec<Candidate>> {
        let summaries = self.store.list_eligible(&self.kinds, POOL_LIMIT)?;
        let mut candidates = Vec::with_capacity(summaries.len());

        for summary in summaries {
            let tags = self.store.tag_names(summary.id)?.join(" ");
            let categories = self.store.category_names(summary.id)?.join(" ");
            let excerpt = self.store.excerpt(summary.id)?.unwrap_or_default();

            candidates.push(Candidate {
                id: summary.id,
                title_tokens: tokenize(&summary.title, language),
                tag_tokens: tokenize(&tags, language),
                category_tokens: tokenize(&categories, language),
                excerpt_tokens: tokenize(&excerpt, language),
                title: summary.title,
                url: summary.url,
            });
        }

        info!(
            candidates = candidates.len(),
            language = language.as_str(),
            "Candidate pool rebuilt"
        );
        Ok(candidates)
    }
}

fn without(candidates: Vec<Candidate>, exclude_id: u64) -> Vec<Candidate> {
    candidates.into_iter().filter(|c| c.id != exclude_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::cache::MemoryPoolCache;
    use crate::store::models::{ContentItem, ContentStatus};
    use crate::store::InMemoryStore;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_item(id: u64, title: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            id,
            kind: ContentKind::Post,
            status: ContentStatus::Published,
            title: title.to_string(),
            url: format!("https://example.com/?p={id}"),
            date: Utc.with_ymd_and_hms(2026, 3, id as u32, 9, 0, 0).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            categories: vec!["Guides".to_string()],
            excerpt: String::new(),
            content: "<p>body</p>".to_string(),
        }
    }

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::with_settings(Default::default());
        store.upsert(sample_item(1, "WordPress SEO Guide", &["seo", "wordpress"]));
        store.upsert(sample_item(2, "Plugin Development Basics", &["plugins"]));
        store
    }

    #[test]
    fn test_pool_excludes_self() {
        let store = seeded_store();
        let cache = MemoryPoolCache::new();
        let builder = PoolBuilder::new(&store, &cache, vec![ContentKind::Post]);

        let pool = builder.pool(1, Language::English).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, 2);
    }

    #[test]
    fn test_fields_tokenized_independently() {
        let store = seeded_store();
        let cache = MemoryPoolCache::new();
        let builder = PoolBuilder::new(&store, &cache, vec![ContentKind::Post]);

        let pool = builder.pool(0, Language::English).unwrap();
        let guide = pool.iter().find(|c| c.id == 1).unwrap();
        assert_eq!(guide.title_tokens, vec!["wordpress", "seo", "guide"]);
        assert_eq!(guide.tag_tokens, vec!["seo", "wordpress"]);
        assert_eq!(guide.category_tokens, vec!["guides"]);
        assert!(guide.excerpt_tokens.is_empty());
    }

    #[test]
    fn test_cache_hit_skips_store() {
        // A store that counts how often the listing is queried
        struct CountingStore {
            inner: InMemoryStore,
            listings: AtomicUsize,
        }
        impl ContentStore for CountingStore {
            fn list_eligible(
                &self,
                kinds: &[ContentKind],
                limit: usize,
            ) -> Result<Vec<crate::store::models::ContentSummary>> {
                self.listings.fetch_add(1, Ordering::SeqCst);
                self.inner.list_eligible(kinds, limit)
            }
            fn tag_names(&self, id: u64) -> Result<Vec<String>> {
                self.inner.tag_names(id)
            }
            fn category_names(&self, id: u64) -> Result<Vec<String>> {
                self.inner.category_names(id)
            }
            fn excerpt(&self, id: u64) -> Result<Option<String>> {
                self.inner.excerpt(id)
            }
            fn raw_content(&self, id: u64) -> Result<Option<String>> {
                self.inner.raw_content(id)
            }
        }

        let store = CountingStore {
            inner: seeded_store(),
            listings: AtomicUsize::new(0),
        };
        let cache = MemoryPoolCache::new();
        let builder = PoolBuilder::new(&store, &cache, vec![ContentKind::Post]);

        builder.pool(0, Language::English).unwrap();
        builder.pool(1, Language::English).unwrap();
        builder.pool(2, Language::English).unwrap();
        assert_eq!(store.listings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let store = seeded_store();
        let cache = MemoryPoolCache::new();
        let builder = PoolBuilder::new(&store, &cache, vec![ContentKind::Post]);

        assert_eq!(builder.pool(0, Language::English).unwrap().len(), 2);

        store.upsert(sample_item(3, "Caching Deep Dive", &["caching"]));
        // Still the stale snapshot until the save-side invalidation fires
        assert_eq!(builder.pool(0, Language::English).unwrap().len(), 2);

        builder.invalidate();
        assert_eq!(builder.pool(0, Language::English).unwrap().len(), 3);
    }

    #[test]
    fn test_language_change_rebuilds() {
        let store = seeded_store();
        let cache = MemoryPoolCache::new();
        let builder = PoolBuilder::new(&store, &cache, vec![ContentKind::Post]);

        builder.pool(0, Language::English).unwrap();
        // Requesting German must not serve English token lists
        let pool = builder.pool(0, Language::German).unwrap();
        assert_eq!(pool.len(), 2);
        let cached = cache.get(POOL_CACHE_KEY).unwrap();
        assert_eq!(cached.language, Language::German);
    }
}
