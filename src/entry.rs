//! Cache entry with the metadata needed for recency tracking.

use std::time::Instant;

/// A single cache entry containing the value and its last-access time.
///
/// The timestamp is what the pruning routine compares against the keep
/// period: an entry is protected from capacity eviction until the keep
/// period has elapsed since `last_accessed`.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    /// The stored value.
    pub(crate) value: V,

    /// When this entry was last read or written.
    pub(crate) last_accessed: Instant,
}

impl<V> Entry<V> {
    /// Create a new entry, last accessed at the given time.
    pub(crate) fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            last_accessed: now,
        }
    }

    /// Update the last accessed time to a specific instant.
    ///
    /// The instant comes from the cache's injected clock so that a single
    /// time observation covers both pruning and the timestamp refresh.
    pub(crate) fn touch_at(&mut self, now: Instant) {
        self.last_accessed = now;
    }

    /// Get a reference to the value.
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Consume the entry, returning the value.
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}
