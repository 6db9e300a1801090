// Pool cache: injected get/set/delete abstraction with per-entry TTL.
//
// The cache is the only shared mutable state in the whole engine. Reads
// vastly outnumber writes, and a stampede (two requests rebuilding the
// pool at once) is harmless: last writer wins, both wrote the same data.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::config::Language;
use crate::store::models::Candidate;

/// A cached candidate pool, stamped with the language it was built for.
/// A language mismatch at read time is treated as a miss so token lists
/// never leak across languages.
#[derive(Debug, Clone)]
pub struct CachedPool {
    pub language: Language,
    pub candidates: Vec<Candidate>,
}

/// Cache abstraction the pool builder is handed. Get/set/delete are each
/// atomic at the granularity of a single key.
pub trait PoolCache: Send + Sync {
    fn get(&self, key: &str) -> Option<CachedPool>;

    /// Store a pool. `ttl` of None means the entry lives until an
    /// explicit delete.
    fn set(&self, key: &str, pool: CachedPool, ttl: Option<Duration>);

    fn delete(&self, key: &str);
}

struct Entry {
    pool: CachedPool,
    expires_at: Option<Instant>,
}

/// Process-local cache behind a RwLock.
///
/// Expired entries are simply skipped on read and replaced on the next
/// set; with a single well-known key there is nothing to reap.
#[derive(Default)]
pub struct MemoryPoolCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryPoolCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoolCache for MemoryPoolCache {
    fn get(&self, key: &str) -> Option<CachedPool> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.expires_at.is_some_and(|deadline| Instant::now() >= deadline) {
            return None;
        }
        Some(entry.pool.clone())
    }

    fn set(&self, key: &str, pool: CachedPool, ttl: Option<Duration>) {
        let entry = Entry {
            pool,
            expires_at: ttl.map(|d| Instant::now() + d),
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }
}
