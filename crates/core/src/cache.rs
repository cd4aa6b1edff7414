//! # Query Cache
//!
//! Explicit cache for fetched resources keyed by a logical resource name
//! (`"working-slots"`, ...). Callers invalidate a key after a write so the
//! next read goes back to the server.
//!
//! Backed by `moka`, so expired entries are evicted rather than only hidden.

use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

/// Cache key of the working-slot list.
pub const WORKING_SLOTS_KEY: &str = "working-slots";

/// Default max capacity (distinct resource keys).
pub const DEFAULT_QUERY_CACHE_MAX_CAPACITY: u64 = 64;

#[derive(Debug)]
pub struct QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    entries: Cache<String, V>,
}

impl<V> Default for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(DEFAULT_QUERY_CACHE_MAX_CAPACITY)
                .build(),
        }
    }
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries older than `ttl` are treated as missing and evicted.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(DEFAULT_QUERY_CACHE_MAX_CAPACITY)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key)
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
    }

    /// Returns whether a live entry was dropped.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key, "Invalidated cached query");
        }
        removed
    }

    /// Live entries after pending evictions have run.
    pub fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}
