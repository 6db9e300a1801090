// Candidate pool: the cached, tokenized universe of linkable content.
//
// The builder assembles candidates from the content store and parks them
// in an injected cache; the exclusion filter strips editor-blacklisted
// ids before scoring.

pub mod builder;
pub mod cache;
pub mod exclusion;

pub use builder::{PoolBuilder, POOL_CACHE_KEY, POOL_LIMIT, POOL_TTL};
pub use cache::{CachedPool, MemoryPoolCache, PoolCache};
pub use exclusion::filter_excluded;
