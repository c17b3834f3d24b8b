//! Time sources for the cache.
//!
//! The cache reads the current time exactly once per operation through an
//! injected [`Clock`]. Production code uses [`SystemClock`]; tests can
//! substitute [`ManualClock`] to drive pruning deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A source of the current time.
///
/// Implementations should produce monotonically non-decreasing instants;
/// the cache tolerates a clock that steps backwards, but the keep-period
/// semantics are only meaningful for a forward-moving clock.
pub trait Clock {
    /// Return the current instant.
    fn now(&self) -> Instant;
}

/// The default clock, backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Cloning a `ManualClock` produces a handle to the same underlying time,
/// so a test can hold one handle, hand the other to the cache, and advance
/// both at once.
///
/// # Example
/// ```
/// use keep_lru::{Cache, CacheConfig, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let config = CacheConfig::new()
///     .capacity(2)
///     .keep_period(Duration::from_secs(60))
///     .build();
/// let mut cache = Cache::with_clock(config, clock.clone());
///
/// cache.insert("a", 1);
/// clock.advance(Duration::from_secs(30));
/// cache.insert("b", 2);
/// cache.insert("c", 3);
///
/// // "a" is over capacity but still inside its keep period
/// assert_eq!(cache.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    /// Arbitrary fixed origin; only offsets from it are meaningful.
    origin: Instant,

    /// Time elapsed since the origin, shared between handles.
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a new manual clock, starting at an arbitrary origin.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward by the given duration.
    pub fn advance(&self, delta: Duration) {
        self.elapsed.set(self.elapsed.get() + delta);
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
