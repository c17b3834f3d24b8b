//! The main cache interface.
//!
//! This module provides the `Cache` type: an ordered key/value store that
//! evicts least-recently-used entries once over capacity, except entries
//! still inside their keep period.

use ahash::RandomState;
use indexmap::IndexMap;
use std::hash::Hash;
use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::entry::Entry;

/// An in-memory LRU cache with a minimum keep period.
///
/// Entries are kept in access order: the front is the least recently used
/// and the first candidate for eviction, the back is the most recently
/// used. Every read or write of a key moves it to the back and refreshes
/// its timestamp.
///
/// The capacity is a *soft* bound. When the cache is over capacity, the
/// pruning routine walks from the oldest entry forward and evicts entries
/// whose keep period has elapsed, stopping at the first entry that is
/// still protected. With no keep period configured, the capacity behaves
/// as a hard limit.
///
/// # Example
/// ```
/// use keep_lru::{Cache, CacheConfig};
///
/// let config = CacheConfig::new().capacity(2).build();
/// let mut cache = Cache::new(config);
///
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.insert("c", 3); // evicts "a"
///
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
///
/// # Single-threaded
/// Operations take `&mut self` and the cache performs no internal locking.
/// Callers that need to share a cache across threads must serialize access
/// themselves (e.g. behind a `Mutex`).
#[derive(Debug)]
pub struct Cache<K, V, C = SystemClock> {
    /// Keyed storage in access order: index 0 is the least recently used.
    entries: IndexMap<K, Entry<V>, RandomState>,

    /// Configuration for this cache instance.
    config: CacheConfig,

    /// Source of the current time, read once per operation.
    clock: C,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq,
{
    /// Create a new cache with the given configuration.
    ///
    /// Construction never fails: a configuration with capacity or keep
    /// period disabled is a valid cache with that constraint turned off.
    ///
    /// # Example
    /// ```
    /// use keep_lru::{Cache, CacheConfig};
    ///
    /// let mut cache = Cache::new(CacheConfig::default());
    /// cache.insert("key", "value");
    /// ```
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Hash + Eq,
    C: Clock,
{
    /// Create a new cache with an explicit time source.
    ///
    /// This is how tests substitute a deterministic clock; see
    /// [`ManualClock`](crate::ManualClock). The clock is consulted exactly
    /// once per `get` or `insert`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(
                config.capacity.unwrap_or(0),
                RandomState::new(),
            ),
            config,
            clock,
        }
    }

    /// Get a value from the cache, marking the key as recently used.
    ///
    /// Returns `None` if the key is not present; a miss has no effect on
    /// the cache contents beyond pruning. When a keep period is configured,
    /// pruning runs before the lookup, so a read on one key may evict
    /// unrelated stale entries (including, if it has aged out, the looked-up
    /// key itself).
    ///
    /// # Example
    /// ```
    /// use keep_lru::Cache;
    ///
    /// let mut cache = Cache::default();
    /// cache.insert("key", 42);
    ///
    /// assert_eq!(cache.get(&"key"), Some(&42));
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.now();

        if self.config.keep_period.is_some() {
            self.prune(now);
        }

        let index = self.entries.get_index_of(key)?;
        let back = self.entries.len() - 1;
        self.entries.move_index(index, back);

        let (_, entry) = self.entries.get_index_mut(back)?;
        entry.touch_at(now);
        Some(entry.value())
    }

    /// Insert a key-value pair, returning the previously stored value.
    ///
    /// The key becomes the most recently used entry whether it is new or
    /// replaces an existing one. Pruning runs after the insert, using the
    /// same time observation that stamped the entry.
    ///
    /// # Example
    /// ```
    /// use keep_lru::Cache;
    ///
    /// let mut cache = Cache::default();
    /// assert_eq!(cache.insert("key", 1), None);
    /// assert_eq!(cache.insert("key", 2), Some(1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let now = self.clock.now();

        let (index, previous) = self.entries.insert_full(key, Entry::new(value, now));

        // A replaced key keeps its old position; move it to the back explicitly.
        if previous.is_some() {
            let back = self.entries.len() - 1;
            self.entries.move_index(index, back);
        }

        self.prune(now);

        previous.map(Entry::into_value)
    }

    /// Get the number of entries in the cache.
    ///
    /// With a keep period configured this may exceed the capacity: entries
    /// inside their protection window are retained past the bound.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key is present in the cache.
    ///
    /// Note: this does NOT mark the key as recently used or refresh its
    /// keep period.
    ///
    /// # Example
    /// ```
    /// use keep_lru::Cache;
    ///
    /// let mut cache = Cache::default();
    /// assert!(!cache.contains(&"key"));
    /// cache.insert("key", "value");
    /// assert!(cache.contains(&"key"));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the entries from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, entry)| (key, entry.value()))
    }

    /// Remove all entries from the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Evict entries while the cache is over capacity.
    ///
    /// Scans from the oldest entry forward and stops at the first entry
    /// whose keep period has not elapsed at `now`. Entries are stored in
    /// touch order, so everything behind that entry is at least as recent
    /// and the scan need not continue.
    fn prune(&mut self, now: Instant) {
        let Some(capacity) = self.config.capacity else {
            return;
        };

        while self.entries.len() > capacity {
            let Some((_, oldest)) = self.entries.first() else {
                break;
            };

            if let Some(keep_period) = self.config.keep_period {
                if now.saturating_duration_since(oldest.last_accessed) <= keep_period {
                    break;
                }
            }

            self.entries.shift_remove_index(0);
        }
    }
}
