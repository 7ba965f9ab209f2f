//! Cache Module
//!
//! Provides an in-memory key/value cache with a fixed TTL and lazy expiry.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Default time-to-live for cached values (30 minutes)
pub const DEFAULT_TTL_SECS: u64 = 30 * 60;
