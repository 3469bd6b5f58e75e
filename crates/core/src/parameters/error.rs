//! Parameter error types
//!
//! Provides error types for maneuver parameter validation.

/// Out-of-domain maneuver parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Speed magnitude above the actuator's 0..=200 range
    SpeedOutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: u16,
    },
    /// Steering angle outside the actuator's -2000..=2000 range
    SteerOutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: i32,
    },
}

impl core::fmt::Display for ParamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamError::SpeedOutOfRange { name, value } => {
                write!(f, "{} = {} is outside 0..=200", name, value)
            }
            ParamError::SteerOutOfRange { name, value } => {
                write!(f, "{} = {} is outside -2000..=2000", name, value)
            }
        }
    }
}

impl core::error::Error for ParamError {}
