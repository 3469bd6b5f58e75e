//! Sequencer State Types

use core::time::Duration;

use super::phase::Phase;
use crate::traits::Timestamp;

/// Mutable state of a parking run.
///
/// Created once at start and mutated only by [`ParkingSequencer::tick`]
/// when a phase expires.
///
/// [`ParkingSequencer::tick`]: super::ParkingSequencer::tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencerState {
    phase: Phase,
    phase_start: Timestamp,
}

impl SequencerState {
    /// Fresh state in `Approach`, entered at `now`.
    pub const fn new(now: Timestamp) -> Self {
        Self {
            phase: Phase::Approach,
            phase_start: now,
        }
    }

    /// Active phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Time the active phase was entered.
    pub const fn phase_start(&self) -> Timestamp {
        self.phase_start
    }

    /// Time spent in the active phase, zero if `now` is before the phase
    /// start.
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        now.saturating_duration_since(self.phase_start)
    }

    pub(crate) fn enter(&mut self, phase: Phase, now: Timestamp) {
        self.phase = phase;
        self.phase_start = now;
    }
}
