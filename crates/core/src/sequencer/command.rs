//! Actuator command and per-phase profile types

use core::time::Duration;

use super::phase::Phase;
use crate::parameters::ParkingParams;

/// Transmission selection.
///
/// Discriminants are the actuator's wire values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Gear {
    /// Forward (also used as the stopped/neutral gear)
    Drive = 0,
    /// Reverse
    Reverse = 2,
}

impl Gear {
    /// Wire value (`0` = drive, `2` = reverse)
    pub const fn wire_value(self) -> u8 {
        self as u8
    }
}

/// Control values sent to the actuator stack for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    /// Emergency stop request (never set by the parking maneuver)
    pub emergency_stop: bool,
    /// Brake flag (always engaged by the parking maneuver)
    pub brake: bool,
    /// Transmission
    pub gear: Gear,
    /// Speed magnitude, 0..=200
    pub speed: u8,
    /// Steering angle, -2000..=2000 (negative = right)
    pub steer: i16,
}

impl Command {
    /// The stop command emitted while `Done`.
    pub const fn stop(steer_straight: i16) -> Self {
        Self {
            emergency_stop: false,
            brake: true,
            gear: Gear::Drive,
            speed: 0,
            steer: steer_straight,
        }
    }
}

/// Static configuration of one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseProfile {
    /// Phase length; `None` never expires
    pub duration: Option<Duration>,
    /// Transmission during the phase
    pub gear: Gear,
    /// Speed during the phase
    pub speed: u8,
    /// Steering during the phase
    pub steer: i16,
}

impl PhaseProfile {
    /// Derive the profile of `phase` from the maneuver parameters.
    pub fn for_phase(params: &ParkingParams, phase: Phase) -> Self {
        match phase {
            Phase::Approach => Self {
                duration: Some(params.forward_duration),
                gear: Gear::Drive,
                speed: params.forward_speed,
                steer: params.steer_straight,
            },
            Phase::Entry => Self {
                duration: Some(params.entry_duration),
                gear: Gear::Reverse,
                speed: params.reverse_speed,
                steer: params.steer_right,
            },
            Phase::Adjust => Self {
                duration: Some(params.adjust_duration),
                gear: Gear::Reverse,
                speed: params.reverse_speed,
                steer: params.steer_left,
            },
            Phase::Straight => Self {
                duration: Some(params.straight_duration),
                gear: Gear::Reverse,
                speed: params.reverse_speed,
                steer: params.steer_straight,
            },
            Phase::Done => Self {
                duration: None,
                gear: Gear::Drive,
                speed: 0,
                steer: params.steer_straight,
            },
        }
    }

    /// Whether a phase that has run for `elapsed` is over.
    pub fn is_expired(&self, elapsed: Duration) -> bool {
        match self.duration {
            Some(duration) => elapsed >= duration,
            None => false,
        }
    }

    /// Command emitted on every non-transition tick of this phase.
    pub const fn command(&self) -> Command {
        Command {
            emergency_stop: false,
            brake: true,
            gear: self.gear,
            speed: self.speed,
            steer: self.steer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_wire_values() {
        assert_eq!(Gear::Drive.wire_value(), 0);
        assert_eq!(Gear::Reverse.wire_value(), 2);
    }

    #[test]
    fn test_default_profiles() {
        let params = ParkingParams::default();

        let approach = PhaseProfile::for_phase(&params, Phase::Approach);
        assert_eq!(approach.duration, Some(Duration::from_secs(3)));
        assert_eq!(approach.gear, Gear::Drive);
        assert_eq!((approach.speed, approach.steer), (30, 0));

        let entry = PhaseProfile::for_phase(&params, Phase::Entry);
        assert_eq!(entry.gear, Gear::Reverse);
        assert_eq!((entry.speed, entry.steer), (30, -1000));

        let adjust = PhaseProfile::for_phase(&params, Phase::Adjust);
        assert_eq!(adjust.gear, Gear::Reverse);
        assert_eq!((adjust.speed, adjust.steer), (30, 1000));

        let straight = PhaseProfile::for_phase(&params, Phase::Straight);
        assert_eq!(straight.duration, Some(Duration::from_secs(1)));
        assert_eq!((straight.speed, straight.steer), (30, 0));

        let done = PhaseProfile::for_phase(&params, Phase::Done);
        assert_eq!(done.duration, None);
        assert_eq!(done.command(), Command::stop(0));
    }

    #[test]
    fn test_expiry_is_inclusive_of_duration() {
        let profile = PhaseProfile::for_phase(&ParkingParams::default(), Phase::Straight);
        assert!(!profile.is_expired(Duration::from_millis(999)));
        assert!(profile.is_expired(Duration::from_millis(1_000)));
    }

    #[test]
    fn test_done_never_expires() {
        let profile = PhaseProfile::for_phase(&ParkingParams::default(), Phase::Done);
        assert!(!profile.is_expired(Duration::MAX));
    }

    #[test]
    fn test_commands_always_brake_without_estop() {
        let params = ParkingParams::default();
        for phase in Phase::ALL {
            let cmd = PhaseProfile::for_phase(&params, phase).command();
            assert!(cmd.brake);
            assert!(!cmd.emergency_stop);
        }
    }
}
