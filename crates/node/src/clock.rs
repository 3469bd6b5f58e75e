//! Monotonic clock for the driver loop.

use erp42_park_core::TimeSource;
use tokio::time::Instant;

/// `TimeSource` backed by `tokio::time::Instant`.
///
/// Reads are relative to the instant the clock was created. Under a paused
/// tokio runtime (`start_paused = true`) the clock follows tokio's virtual
/// time, which keeps driver tests deterministic.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    /// Clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Instant that corresponds to time zero.
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TokioClock {
    fn now_us(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn follows_paused_time() {
        let clock = TokioClock::new();
        assert_eq!(clock.now_us(), 0);

        tokio::time::advance(Duration::from_millis(250)).await;
        assert_eq!(clock.now_us(), 250_000);
        assert_eq!(clock.now_ms(), 250);
    }

    #[tokio::test(start_paused = true)]
    async fn copies_share_origin() {
        let clock = TokioClock::new();
        let copy = clock;
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(clock.now_us(), copy.now_us());
    }
}
