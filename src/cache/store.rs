//! Cache Store Module
//!
//! Concurrent key/value store where every entry shares one fixed TTL.
//! Staleness is checked lazily on read; nothing sweeps the map in the background.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::trace;

use crate::cache::stats::StatCounters;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Expiring Cache ==
/// In-memory cache with a fixed time-to-live.
///
/// All operations take `&self`, so one instance can be shared through an `Arc`
/// by every request handler. Reads hand back a clone of the stored value; store
/// `Arc<T>` when the value is large.
pub struct ExpiringCache<V> {
    /// Key-value storage
    entries: DashMap<String, CacheEntry<V>>,
    /// Maximum age of a valid entry, in milliseconds
    ttl_ms: i64,
    /// Time source for stamping and expiry checks
    clock: Arc<dyn Clock>,
    /// Performance counters
    stats: StatCounters,
}

impl<V: Clone> ExpiringCache<V> {
    // == Constructor ==
    /// Creates an empty cache using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl_ms: ttl.as_millis() as i64,
            clock,
            stats: StatCounters::default(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and restarting
    /// its TTL window.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is absent. A stale entry is removed and also
    /// reported as `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        let now_ms = self.clock.now_ms();
        let ttl_ms = self.ttl_ms;

        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now_ms, ttl_ms))
            .is_some()
        {
            trace!(key, "Cache entry expired");
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms as u64)
    }

    /// Returns the clock this cache stamps entries with.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included until read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> fmt::Debug for ExpiringCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .field("ttl_ms", &self.ttl_ms)
            .field("clock", &self.clock)
            .finish()
    }
}
