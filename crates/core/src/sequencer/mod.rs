//! Parking maneuver state machine
//!
//! # Contents
//!
//! - [`Phase`]: the five maneuver phases and their ordering
//! - [`PhaseProfile`] / [`Command`]: per-phase motion and the emitted command
//! - [`SequencerState`]: active phase and phase start time
//! - [`ParkingSequencer`]: the tick-driven sequencer itself

mod command;
mod phase;
#[allow(clippy::module_inception)]
mod sequencer;
mod state;

pub use command::{Command, Gear, PhaseProfile};
pub use phase::Phase;
pub use sequencer::{ParkingSequencer, TickOutcome};
pub use state::SequencerState;
