//! # Keep-LRU
//!
//! An in-memory LRU cache whose capacity bound is softened by a minimum
//! "keep period": an entry is never evicted while the keep period has not
//! elapsed since its last access, even if that leaves the cache over
//! capacity. Pure LRU caches can discard items too eagerly during short
//! bursts of re-access; the keep period guarantees a minimum residency
//! time instead.
//!
//! ## Features
//!
//! - **LRU eviction**: once over capacity, the least recently used entries
//!   are evicted first
//! - **Keep period**: recently touched entries survive capacity pressure
//!   until their protection window elapses
//! - **Injected clock**: deterministic tests substitute the time source at
//!   construction, no global state
//! - **Generic**: any `Hash + Eq` key type, any value type
//! - **Zero unsafe code**: built entirely with safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use keep_lru::{Cache, CacheConfig};
//! use std::time::Duration;
//!
//! let config = CacheConfig::new()
//!     .capacity(2)
//!     .keep_period(Duration::from_secs(30))
//!     .build();
//! let mut cache = Cache::new(config);
//!
//! assert_eq!(cache.insert("user:123", "Alice"), None);
//! assert_eq!(cache.insert("user:456", "Bob"), None);
//!
//! if let Some(name) = cache.get(&"user:123") {
//!     println!("Found: {}", name);
//! }
//!
//! // Every entry was touched within the last 30 seconds, so a third
//! // insert leaves the cache over capacity instead of evicting one.
//! cache.insert("user:789", "Carol");
//! assert_eq!(cache.len(), 3);
//! ```
//!
//! Without a keep period the capacity is a hard limit and the cache is a
//! plain LRU:
//!
//! ```rust
//! use keep_lru::{Cache, CacheConfig};
//!
//! let mut cache = Cache::new(CacheConfig::new().capacity(2).build());
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.insert(3, "three"); // evicts 1
//!
//! assert_eq!(cache.len(), 2);
//! assert!(!cache.contains(&1));
//! ```
//!
//! ## Deterministic time
//!
//! The cache reads the current time through a [`Clock`] supplied at
//! construction, once per operation. Tests drive eviction with a
//! [`ManualClock`]:
//!
//! ```rust
//! use keep_lru::{Cache, CacheConfig, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let config = CacheConfig::new()
//!     .capacity(1)
//!     .keep_period(Duration::from_secs(10))
//!     .build();
//! let mut cache = Cache::with_clock(config, clock.clone());
//!
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! assert_eq!(cache.len(), 2); // both inside the keep period
//!
//! clock.advance(Duration::from_secs(11));
//! cache.insert(3, "three");
//! assert_eq!(cache.len(), 1); // 1 and 2 aged out of protection
//! ```
//!
//! ## Single-threaded
//!
//! Operations take `&mut self`; the cache holds no locks and makes no
//! thread-safety guarantees. Embedders that share a cache across threads
//! wrap it in their own synchronization (a `Mutex`, or a single-owner
//! task).

// Public API - stable in v1.0.0
pub mod cache;
pub mod clock;
pub mod config;

pub use cache::Cache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;

// Internal modules - not part of public API
pub(crate) mod entry;
