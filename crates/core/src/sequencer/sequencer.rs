//! Parking Sequencer
//!
//! Time-scheduled state machine that walks the maneuver phases and
//! synthesizes one actuator command per tick. It has no feedback input:
//! the only thing that moves it forward is elapsed time.
//!
//! The sequencer does not know about transports, timers or logging. The
//! driver samples a clock, calls [`ParkingSequencer::tick`], and forwards
//! whatever comes back.

use core::time::Duration;

use super::command::{Command, PhaseProfile};
use super::phase::Phase;
use super::state::SequencerState;
use crate::parameters::ParkingParams;
use crate::traits::{TimeSource, Timestamp};

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active phase is still running; forward this command.
    Command(Command),
    /// The active phase expired and the sequencer advanced.
    ///
    /// No command is produced on a transition tick. The new phase's
    /// command is emitted starting with the next tick.
    Transition {
        /// Phase that expired
        from: Phase,
        /// Phase that is now active
        to: Phase,
        /// New phase start time (the tick's `now`)
        at: Timestamp,
    },
}

impl TickOutcome {
    /// The command to forward, if any.
    pub fn command(&self) -> Option<Command> {
        match self {
            TickOutcome::Command(cmd) => Some(*cmd),
            TickOutcome::Transition { .. } => None,
        }
    }

    /// Whether this tick advanced the phase.
    pub fn is_transition(&self) -> bool {
        matches!(self, TickOutcome::Transition { .. })
    }
}

/// Open-loop parallel-parking sequencer.
#[derive(Clone, Debug)]
pub struct ParkingSequencer {
    params: ParkingParams,
    profiles: [PhaseProfile; 5],
    state: SequencerState,
}

impl ParkingSequencer {
    /// Create a sequencer in `Approach`, with the phase clock started at
    /// `now`.
    pub fn new(params: ParkingParams, now: Timestamp) -> Self {
        let profiles = Phase::ALL.map(|phase| PhaseProfile::for_phase(&params, phase));
        Self {
            params,
            profiles,
            state: SequencerState::new(now),
        }
    }

    /// Create a sequencer with the default maneuver parameters.
    pub fn with_defaults(now: Timestamp) -> Self {
        Self::new(ParkingParams::default(), now)
    }

    /// Create a sequencer started at the current time of `time`.
    pub fn start<T: TimeSource + ?Sized>(params: ParkingParams, time: &T) -> Self {
        Self::new(params, time.now())
    }

    /// Evaluate one tick at `now`.
    ///
    /// If the active phase has run for at least its duration, advances to
    /// the successor phase (restarting the phase clock at `now`) and
    /// returns [`TickOutcome::Transition`]. Otherwise returns the active
    /// phase's command. At most one transition happens per call.
    ///
    /// A `now` earlier than the phase start counts as zero elapsed time.
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        let phase = self.state.phase();
        let profile = &self.profiles[phase.index()];
        let elapsed = self.state.elapsed(now);

        if profile.is_expired(elapsed) {
            if let Some(next) = phase.next() {
                self.state.enter(next, now);
                return TickOutcome::Transition {
                    from: phase,
                    to: next,
                    at: now,
                };
            }
        }

        TickOutcome::Command(profile.command())
    }

    /// Sample `time` and evaluate one tick.
    pub fn tick_with<T: TimeSource + ?Sized>(&mut self, time: &T) -> TickOutcome {
        self.tick(time.now())
    }

    /// Active phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Time the active phase was entered.
    pub fn phase_start(&self) -> Timestamp {
        self.state.phase_start()
    }

    /// Time spent in the active phase as of `now`.
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        self.state.elapsed(now)
    }

    /// Whether the maneuver has finished.
    pub fn is_done(&self) -> bool {
        self.state.phase().is_terminal()
    }

    /// Snapshot of the mutable state.
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    /// Parameters the profile table was built from.
    pub fn params(&self) -> &ParkingParams {
        &self.params
    }

    /// Static profile of `phase`.
    pub fn profile(&self, phase: Phase) -> &PhaseProfile {
        &self.profiles[phase.index()]
    }
}
