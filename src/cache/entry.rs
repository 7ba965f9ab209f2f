//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// A stored value together with the time it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp (Unix milliseconds)
    pub stored_at_ms: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now_ms`.
    pub fn new(value: V, now_ms: i64) -> Self {
        Self {
            value,
            stored_at_ms: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.stored_at_ms
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is still valid.
    /// It only expires once the age is strictly greater than the TTL.
    pub fn is_expired(&self, now_ms: i64, ttl_ms: i64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: i64, ttl_ms: i64) -> i64 {
        (ttl_ms - self.age_ms(now_ms)).max(0)
    }
}
