//! Maneuver timeline
//!
//! Static view of when each phase starts and what it commands, used by
//! `erp42-parkd --print-plan` to check a profile before driving it.

use std::fmt;
use std::time::Duration;

use erp42_park_core::{Command, ParkingParams, Phase, PhaseProfile};

/// One row of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub phase: Phase,
    /// Offset from maneuver start at which the phase is entered
    pub start: Duration,
    /// `None` for the terminal phase
    pub duration: Option<Duration>,
    pub command: Command,
}

/// Phase timeline for `params`, assuming ticks land exactly on phase
/// boundaries.
pub fn timeline(params: &ParkingParams) -> Vec<PlanEntry> {
    let mut start = Duration::ZERO;
    Phase::ALL
        .iter()
        .map(|&phase| {
            let profile = PhaseProfile::for_phase(params, phase);
            let entry = PlanEntry {
                phase,
                start,
                duration: profile.duration,
                command: profile.command(),
            };
            start += profile.duration.unwrap_or_default();
            entry
        })
        .collect()
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = match self.duration {
            Some(d) => format!("{:.1}s", d.as_secs_f64()),
            None => "-".to_string(),
        };
        write!(
            f,
            "{:<9} t+{:>5.1}s  {:>5}  gear={} speed={:>3} steer={:>5}",
            self.phase.name(),
            self.start.as_secs_f64(),
            duration,
            self.command.gear.wire_value(),
            self.command.speed,
            self.command.steer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_offsets() {
        let plan = timeline(&ParkingParams::default());
        let starts: Vec<u64> = plan.iter().map(|e| e.start.as_millis() as u64).collect();
        assert_eq!(starts, vec![0, 3_000, 5_000, 7_000, 8_000]);
        assert_eq!(plan[4].phase, Phase::Done);
        assert_eq!(plan[4].duration, None);
        assert_eq!(plan[4].command.speed, 0);
    }

    #[test]
    fn display_row() {
        let plan = timeline(&ParkingParams::default());
        let row = plan[1].to_string();
        assert!(row.starts_with("ENTRY"));
        assert!(row.contains("t+  3.0s"));
        assert!(row.contains("steer=-1000"));
    }
}
