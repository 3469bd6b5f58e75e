//! Time abstraction for the parking sequencer.
//!
//! The sequencer measures phase durations against a monotonic clock. This
//! module provides the `Timestamp` type it stores, and the `TimeSource`
//! trait that decouples it from any particular clock (tokio, mock, etc.).

use core::fmt;
use core::ops::Add;
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

/// Monotonic point in time, in microseconds since an arbitrary origin.
///
/// All timestamps handed to one sequencer must come from the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The clock origin.
    pub const ZERO: Timestamp = Timestamp(0);

    /// Creates a timestamp from microseconds.
    pub const fn from_micros(us: u64) -> Self {
        Self(us)
    }

    /// Creates a timestamp from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms * 1_000)
    }

    /// Creates a timestamp from (non-negative) seconds, rounded to the
    /// nearest microsecond. Negative input maps to the origin.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs <= 0.0 {
            return Self::ZERO;
        }
        Self((secs * 1_000_000.0 + 0.5) as u64)
    }

    /// Microseconds since the origin.
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Seconds since the origin.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Time elapsed from `earlier` to `self`.
    ///
    /// Saturates to zero when `earlier` is later than `self`, so a clock
    /// that steps backwards never yields a negative duration.
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_micros(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let us = u64::try_from(rhs.as_micros()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(us))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}

/// Platform-agnostic monotonic time source.
///
/// This trait abstracts over different time providers:
/// - `TokioClock` (in the node crate) backed by `tokio::time::Instant`
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use erp42_park_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let start = time.now();
/// time.advance(100_000); // one 10 Hz period
/// assert_eq!(time.elapsed_since(start.as_micros()), 100_000);
/// ```
pub trait TimeSource: Send + Sync {
    /// Returns current time in microseconds since the clock origin.
    fn now_us(&self) -> u64;

    /// Returns current time in milliseconds since the clock origin.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1_000
    }

    /// Returns the current time as a [`Timestamp`].
    fn now(&self) -> Timestamp {
        Timestamp::from_micros(self.now_us())
    }

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction so a reference in the future reads as 0.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with manually controlled time.
///
/// Time only moves when the test calls [`set`](MockTime::set) or
/// [`advance`](MockTime::advance). `set` may move time backwards, which is
/// how clock glitches are simulated.
#[derive(Debug, Default)]
pub struct MockTime {
    current_us: AtomicU64,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub const fn new() -> Self {
        Self {
            current_us: AtomicU64::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub const fn with_initial(us: u64) -> Self {
        Self {
            current_us: AtomicU64::new(us),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.store(us, Ordering::Relaxed);
    }

    /// Sets the current time from seconds.
    pub fn set_secs(&self, secs: f64) {
        self.set(Timestamp::from_secs_f64(secs).as_micros());
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, us: u64) {
        self.current_us.fetch_add(us, Ordering::Relaxed);
    }
}

impl Clone for MockTime {
    fn clone(&self) -> Self {
        Self::with_initial(self.now_us())
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.current_us.load(Ordering::Relaxed)
    }
}
