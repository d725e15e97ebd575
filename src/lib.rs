//! # cricket-sim
//!
//! A ball-by-ball simulator for two-innings limited-overs cricket matches.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random draw comes from an injectable
//!    [`BallRng`]. The same seed replays the same match.
//!
//! 2. **Explicit Lifecycle**: A match moves
//!    `NotStarted → InningsInProgress(1) → InningsInProgress(2) → Finished`
//!    and rejects calls that do not fit its phase.
//!
//! 3. **Events, Not Printing**: The controller returns structured
//!    [`MatchEvent`]s. Narration is a separate adapter, so matches can run
//!    headless.
//!
//! ## Modules
//!
//! - `core`: Sides, integer ball counting, RNG, configuration, errors
//! - `squad`: Players, teams, field conditions
//! - `rules`: Ball outcome prediction and per-innings counters
//! - `play`: The match controller, events, summaries and results
//! - `commentary`: Text rendering of match events

pub mod core;
pub mod squad;
pub mod rules;
pub mod play;
pub mod commentary;

// Re-export commonly used types
pub use crate::core::{
    BallCount, BallRng, MatchConfig, MatchError, MatchRng, MatchRngState, Overs, ScriptedRng, Side,
    SideMap,
};

pub use crate::squad::{Field, FieldSize, PitchCondition, Player, PlayerId, Team};

pub use crate::rules::{Outcome, OutcomePredictor};

pub use crate::play::{
    BallReport, EventSink, Innings, InningsEndReason, InningsSummary, Match, MatchEvent, MatchPhase,
    MatchResult, MatchSummary, Scorecard,
};

pub use crate::commentary::{Narrator, TextCommentary};
