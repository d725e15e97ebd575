//! Match lifecycle states.
//!
//! `NotStarted → InningsInProgress(First) → InningsInProgress(Second) → Finished`.
//! Transitions only move forward and `Finished` has no outgoing transitions.

use serde::{Deserialize, Serialize};

/// One of the two innings of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Innings {
    First,
    Second,
}

impl Innings {
    /// 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Innings::First => 1,
            Innings::Second => 2,
        }
    }
}

impl std::fmt::Display for Innings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "innings {}", self.number())
    }
}

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Built but `start_match` not called yet.
    #[default]
    NotStarted,
    /// Balls are being bowled in the given innings.
    InningsInProgress(Innings),
    /// Both innings are complete and the result is fixed.
    Finished,
}

impl MatchPhase {
    /// The innings being played, if any.
    #[must_use]
    pub fn innings(self) -> Option<Innings> {
        match self {
            MatchPhase::InningsInProgress(innings) => Some(innings),
            MatchPhase::NotStarted | MatchPhase::Finished => None,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self == MatchPhase::Finished
    }
}
