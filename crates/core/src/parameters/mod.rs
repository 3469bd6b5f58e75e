//! Maneuver parameter types
//!
//! Static tunables for the parking maneuver. Values are fixed for the
//! lifetime of a run; loading them from files is done by the node crate.

pub mod error;
pub mod parking;

pub use error::ParamError;
pub use parking::{ParkingParams, MAX_SPEED, MAX_STEER, MIN_STEER};
