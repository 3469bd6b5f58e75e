//! Parallel Parking Parameter Definitions
//!
//! # Parameters
//!
//! Timing (seconds):
//! - `forward_duration` - straight forward approach (default 3.0)
//! - `entry_duration` - reverse with right lock (default 2.0)
//! - `adjust_duration` - reverse with left lock (default 2.0)
//! - `straight_duration` - reverse straight alignment (default 1.0)
//!
//! Motion:
//! - `forward_speed`, `reverse_speed` - 0..=200 (default 30)
//! - `steer_right`, `steer_left`, `steer_straight` - -2000..=2000
//!   (defaults -1000, +1000, 0; negative = right)

use core::time::Duration;

use super::error::ParamError;

/// Maximum speed magnitude accepted by the actuator
pub const MAX_SPEED: u8 = 200;

/// Full right steering lock
pub const MIN_STEER: i16 = -2000;

/// Full left steering lock
pub const MAX_STEER: i16 = 2000;

const DEFAULT_FORWARD_DURATION: Duration = Duration::from_millis(3_000);
const DEFAULT_ENTRY_DURATION: Duration = Duration::from_millis(2_000);
const DEFAULT_ADJUST_DURATION: Duration = Duration::from_millis(2_000);
const DEFAULT_STRAIGHT_DURATION: Duration = Duration::from_millis(1_000);

const DEFAULT_FORWARD_SPEED: u8 = 30;
const DEFAULT_REVERSE_SPEED: u8 = 30;

const DEFAULT_STEER_RIGHT: i16 = -1000;
const DEFAULT_STEER_LEFT: i16 = 1000;
const DEFAULT_STEER_STRAIGHT: i16 = 0;

/// Timing and motion profile of the parking maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingParams {
    /// APPROACH phase length
    pub forward_duration: Duration,
    /// ENTRY phase length
    pub entry_duration: Duration,
    /// ADJUST phase length
    pub adjust_duration: Duration,
    /// STRAIGHT phase length
    pub straight_duration: Duration,
    /// Speed while driving forward
    pub forward_speed: u8,
    /// Speed while reversing
    pub reverse_speed: u8,
    /// Steering value for the right turn (ENTRY)
    pub steer_right: i16,
    /// Steering value for the left turn (ADJUST)
    pub steer_left: i16,
    /// Steering value for driving straight
    pub steer_straight: i16,
}

impl Default for ParkingParams {
    fn default() -> Self {
        Self {
            forward_duration: DEFAULT_FORWARD_DURATION,
            entry_duration: DEFAULT_ENTRY_DURATION,
            adjust_duration: DEFAULT_ADJUST_DURATION,
            straight_duration: DEFAULT_STRAIGHT_DURATION,
            forward_speed: DEFAULT_FORWARD_SPEED,
            reverse_speed: DEFAULT_REVERSE_SPEED,
            steer_right: DEFAULT_STEER_RIGHT,
            steer_left: DEFAULT_STEER_LEFT,
            steer_straight: DEFAULT_STEER_STRAIGHT,
        }
    }
}

impl ParkingParams {
    /// Time from the start of APPROACH until DONE is entered
    pub fn total_duration(&self) -> Duration {
        self.forward_duration + self.entry_duration + self.adjust_duration + self.straight_duration
    }

    /// Check every motion value against the actuator's range
    ///
    /// Durations have no upper bound and are unsigned, so they are always
    /// valid. The sequencer itself never calls this.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("forward_speed", self.forward_speed),
            ("reverse_speed", self.reverse_speed),
        ] {
            if value > MAX_SPEED {
                return Err(ParamError::SpeedOutOfRange {
                    name,
                    value: value.into(),
                });
            }
        }

        for (name, value) in [
            ("steer_right", self.steer_right),
            ("steer_left", self.steer_left),
            ("steer_straight", self.steer_straight),
        ] {
            if !(MIN_STEER..=MAX_STEER).contains(&value) {
                return Err(ParamError::SteerOutOfRange {
                    name,
                    value: value.into(),
                });
            }
        }

        Ok(())
    }

    /// Validation as a boolean
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parking_params_defaults() {
        let params = ParkingParams::default();

        assert_eq!(params.forward_duration, Duration::from_secs(3));
        assert_eq!(params.entry_duration, Duration::from_secs(2));
        assert_eq!(params.adjust_duration, Duration::from_secs(2));
        assert_eq!(params.straight_duration, Duration::from_secs(1));
        assert_eq!(params.forward_speed, 30);
        assert_eq!(params.reverse_speed, 30);
        assert_eq!(params.steer_right, -1000);
        assert_eq!(params.steer_left, 1000);
        assert_eq!(params.steer_straight, 0);
        assert!(params.is_valid());
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(
            ParkingParams::default().total_duration(),
            Duration::from_secs(8)
        );
    }

    #[test]
    fn test_speed_limit() {
        let params = ParkingParams {
            reverse_speed: 201,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::SpeedOutOfRange {
                name: "reverse_speed",
                value: 201
            })
        );

        let params = ParkingParams {
            forward_speed: MAX_SPEED,
            ..Default::default()
        };
        assert!(params.is_valid());
    }

    #[test]
    fn test_steer_limits() {
        let params = ParkingParams {
            steer_right: -2001,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::SteerOutOfRange {
                name: "steer_right",
                value: -2001
            })
        );

        let params = ParkingParams {
            steer_left: 2500,
            ..Default::default()
        };
        assert!(!params.is_valid());

        // Full lock on both sides is allowed
        let params = ParkingParams {
            steer_right: MIN_STEER,
            steer_left: MAX_STEER,
            ..Default::default()
        };
        assert!(params.is_valid());
    }

    #[test]
    fn test_zero_durations_are_valid() {
        let params = ParkingParams {
            forward_duration: Duration::ZERO,
            straight_duration: Duration::ZERO,
            ..Default::default()
        };
        assert!(params.is_valid());
        assert_eq!(params.total_duration(), Duration::from_secs(4));
    }
}
