//! Configuration for the cache.
//!
//! This module provides a builder pattern for configuring the two eviction
//! constraints: the soft capacity bound and the per-entry keep period.

use std::time::Duration;

/// Configuration for creating a new cache instance.
///
/// Use the builder pattern to construct configuration:
///
/// ```
/// use keep_lru::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new()
///     .capacity(10_000)
///     .keep_period(Duration::from_secs(30))
///     .build();
/// ```
///
/// Both constraints are optional. A capacity of `0` disables capacity-based
/// eviction entirely; a keep period of zero disables time-based retention,
/// turning the capacity into a hard limit. These degenerate values are valid
/// configurations, not errors.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Soft limit on the number of entries. Pruning only removes entries
    /// beyond this count. `None` means unbounded.
    pub(crate) capacity: Option<usize>,

    /// Minimum duration an entry is protected from eviction after its last
    /// access. `None` means entries are evictable as soon as the cache is
    /// over capacity.
    pub(crate) keep_period: Option<Duration>,
}

impl CacheConfig {
    /// Create a new configuration builder with both constraints disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity of the cache.
    ///
    /// The capacity is a soft bound: entries still inside their keep period
    /// are retained even when the cache is over capacity. Without a keep
    /// period it behaves as a hard bound.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries. Use 0 to disable
    ///   capacity-based eviction.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity == 0 { None } else { Some(capacity) };
        self
    }

    /// Set the keep period.
    ///
    /// An entry is never evicted while the keep period has not elapsed since
    /// its last read or write, even if that leaves the cache over capacity.
    /// Set to `Duration::ZERO` to disable the protection.
    pub fn keep_period(mut self, keep_period: Duration) -> Self {
        self.keep_period = if keep_period.is_zero() {
            None
        } else {
            Some(keep_period)
        };
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Get the capacity, if set.
    pub fn get_capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Get the keep period, if set.
    pub fn get_keep_period(&self) -> Option<Duration> {
        self.keep_period
    }
}
