//! Match errors.
//!
//! Setup errors (invalid players, teams, fields, configuration) are rejected
//! at construction. Lifecycle errors reject calls made in the wrong match
//! phase. `BattingOrderExhaustedWithoutTermination` is an internal invariant
//! violation and is reported as fatal.

/// Errors produced while setting up or driving a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A skill attribute is not a finite value in `[0, 1]`.
    #[error("Player {player:?} has invalid {attribute} value {value} (expected 0.0..=1.0)")]
    InvalidSkillValue {
        /// Player name.
        player: String,
        /// Attribute name (batting, bowling, ...).
        attribute: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A team was created without players.
    #[error("Team {team:?} has no players")]
    EmptyRoster {
        /// Team name.
        team: String,
    },

    /// A roster is larger than player ids can address.
    #[error("Team {team:?} has {size} players (max: 255)")]
    RosterTooLarge {
        /// Team name.
        team: String,
        /// Roster size.
        size: usize,
    },

    /// A team has no batting order.
    #[error("Team {team:?} has an empty batting order")]
    EmptyBattingOrder {
        /// Team name.
        team: String,
    },

    /// A player id does not belong to the team roster.
    #[error("Team {team:?} has no player with index {player}")]
    UnknownPlayer {
        /// Team name.
        team: String,
        /// Rejected roster index.
        player: usize,
    },

    /// A player appears more than once in a batting order.
    #[error("Team {team:?} lists player {player} twice in the batting order")]
    DuplicateBatsman {
        /// Team name.
        team: String,
        /// Repeated roster index.
        player: usize,
    },

    /// Two roster players share a display name.
    #[error("Team {team:?} has two players named {name:?}")]
    DuplicatePlayerName {
        /// Team name.
        team: String,
        /// Repeated name.
        name: String,
    },

    /// Both sides of a match share a name.
    #[error("Both teams are named {name:?}")]
    DuplicateTeamName {
        /// Shared name.
        name: String,
    },

    /// Field conditions are out of range.
    #[error("Invalid field: {reason}")]
    InvalidField {
        /// What was wrong.
        reason: String,
    },

    /// Match configuration is out of range.
    #[error("Invalid match configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },

    /// A scripted random source was given no draws.
    #[error("Scripted random source has no draws")]
    EmptyScript,

    /// Ball or innings call before `start_match`.
    #[error("Cannot {operation}: match has not started")]
    MatchNotStarted {
        /// Rejected operation.
        operation: &'static str,
    },

    /// `start_match` called twice.
    #[error("Match has already started")]
    MatchAlreadyStarted,

    /// `end_match` called while innings remain.
    #[error("Match is still in progress")]
    MatchNotFinished,

    /// Ball or innings call once the match is finished.
    #[error("Cannot {operation}: match is finished")]
    OperationAfterMatchFinished {
        /// Rejected operation.
        operation: &'static str,
    },

    /// The batsman cursor ran past the batting order without ending the innings.
    #[error("Batting order of {team:?} exhausted at index {index} without ending the innings")]
    BattingOrderExhaustedWithoutTermination {
        /// Batting team name.
        team: String,
        /// Cursor value when the violation was detected.
        index: usize,
    },

    /// A presentation sink failed to write.
    #[error("Narration failed: {0}")]
    Narration(#[from] std::io::Error),
}

impl MatchError {
    /// Whether this error indicates a broken internal invariant rather than
    /// bad input or a misplaced call.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MatchError::BattingOrderExhaustedWithoutTermination { .. })
    }
}
