//! Maneuver phases

use core::fmt;

/// One stage of the parallel-parking maneuver.
///
/// Phases form a linear chain with no back-edges:
/// `Approach -> Entry -> Adjust -> Straight -> Done`. `Done` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    /// Drive forward past the slot
    #[default]
    Approach,
    /// Reverse with right lock into the slot
    Entry,
    /// Reverse with left lock to swing the nose in
    Adjust,
    /// Reverse straight to align
    Straight,
    /// Stopped; emits the stop command indefinitely
    Done,
}

impl Phase {
    /// Every phase in maneuver order.
    pub const ALL: [Phase; 5] = [
        Phase::Approach,
        Phase::Entry,
        Phase::Adjust,
        Phase::Straight,
        Phase::Done,
    ];

    /// Successor phase, `None` for `Done`.
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Approach => Some(Phase::Entry),
            Phase::Entry => Some(Phase::Adjust),
            Phase::Adjust => Some(Phase::Straight),
            Phase::Straight => Some(Phase::Done),
            Phase::Done => None,
        }
    }

    /// Whether this is the absorbing terminal phase.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Done)
    }

    /// Position in [`Phase::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case label used in logs and telemetry.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Approach => "APPROACH",
            Phase::Entry => "ENTRY",
            Phase::Adjust => "ADJUST",
            Phase::Straight => "STRAIGHT",
            Phase::Done => "DONE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default_is_approach() {
        assert_eq!(Phase::default(), Phase::Approach);
    }

    #[test]
    fn test_phase_chain() {
        assert_eq!(Phase::Approach.next(), Some(Phase::Entry));
        assert_eq!(Phase::Entry.next(), Some(Phase::Adjust));
        assert_eq!(Phase::Adjust.next(), Some(Phase::Straight));
        assert_eq!(Phase::Straight.next(), Some(Phase::Done));
        assert_eq!(Phase::Done.next(), None);
    }

    #[test]
    fn test_phase_order_matches_chain() {
        for pair in Phase::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn test_only_done_is_terminal() {
        let terminal: usize = Phase::ALL.iter().filter(|p| p.is_terminal()).count();
        assert_eq!(terminal, 1);
        assert!(Phase::Done.is_terminal());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Approach.name(), "APPROACH");
        assert_eq!(Phase::Straight.name(), "STRAIGHT");
    }
}
