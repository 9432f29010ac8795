//! In-memory cache for external source results.
//!
//! Caches scored match lists keyed by (source, normalised submission text)
//! with configurable TTL. Only the external sources are cached — the
//! approved-submission corpus changes between checks, so internal
//! comparisons always run fresh. Uses [`moka`] for async-friendly caching
//! with automatic eviction.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;

use crate::types::{MatchSource, SourceMatch};

/// Maximum number of cached match lists.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Global process-wide result cache.
///
/// Lazily initialised on first access. TTL is set when first created and
/// cannot be changed after initialisation.
static CACHE: OnceLock<Cache<CacheKey, Vec<SourceMatch>>> = OnceLock::new();

/// Composite cache key: source + hash of the normalised submission text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Which external source the cached matches came from.
    source: MatchSource,
    /// Hash of the trimmed, lowercased submission text. The full text is
    /// hashed rather than stored; submission bodies can be large.
    text_hash: u64,
}

impl CacheKey {
    /// Build a deterministic cache key from a source and submission text.
    ///
    /// The text is trimmed and lowercased before hashing so trivial
    /// whitespace and casing differences share an entry.
    pub fn new(source: MatchSource, text: &str) -> Self {
        let normalised = text.trim().to_lowercase();
        let mut hasher = DefaultHasher::new();
        normalised.hash(&mut hasher);
        Self {
            source,
            text_hash: hasher.finish(),
        }
    }
}

/// Get or initialise the global cache with the given TTL.
///
/// The TTL is only used on the **first** call; subsequent calls reuse the
/// existing cache regardless of the TTL argument.
fn get_or_init_cache(ttl_seconds: u64) -> &'static Cache<CacheKey, Vec<SourceMatch>> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build()
    })
}

/// Look up cached matches for the given key.
///
/// Returns `Some(matches)` on cache hit, `None` on miss.
pub async fn get(key: &CacheKey, ttl_seconds: u64) -> Option<Vec<SourceMatch>> {
    let cache = get_or_init_cache(ttl_seconds);
    cache.get(key).await
}

/// Insert source matches into the cache.
pub async fn insert(key: CacheKey, matches: Vec<SourceMatch>, ttl_seconds: u64) {
    let cache = get_or_init_cache(ttl_seconds);
    cache.insert(key, matches).await;
}
