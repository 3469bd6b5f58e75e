//! erp42_park_core - Pure no_std sequencing logic for the ERP42 parking maneuver
//!
//! This crate contains the time-scheduled parallel-parking state machine.
//! It can be tested on host without any runtime or transport.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: The clock is injected via [`traits::TimeSource`]
//!
//! # Modules
//!
//! - [`traits`]: Time abstraction (`TimeSource`, `Timestamp`, `MockTime`)
//! - [`parameters`]: Maneuver tunables and their validation
//! - [`sequencer`]: Phase enum, command types and `ParkingSequencer`

#![no_std]

pub mod parameters;
pub mod sequencer;
pub mod traits;

pub use parameters::{ParamError, ParkingParams};
pub use sequencer::{
    Command, Gear, ParkingSequencer, Phase, PhaseProfile, SequencerState, TickOutcome,
};
pub use traits::{MockTime, TimeSource, Timestamp};
