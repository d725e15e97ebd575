//! Match play: the controller, its lifecycle states and the events it emits.
//!
//! ## Key Components
//!
//! - [`Match`]: owns both teams, the field, the predictor and the RNG, and
//!   advances the match one ball at a time
//! - [`MatchPhase`]: `NotStarted → InningsInProgress(1) → InningsInProgress(2) → Finished`
//! - [`MatchEvent`]: structured record of everything that happens
//! - [`EventSink`]: subscriber interface for presentation layers
//! - [`MatchSummary`]: innings summaries, scorecards and the result

pub mod controller;
pub mod phase;
pub mod events;
pub mod summary;

pub use controller::Match;
pub use phase::{Innings, MatchPhase};
pub use events::{BallReport, EventSink, MatchEvent};
pub use summary::{
    BattingFigures, BowlingFigures, InningsEndReason, InningsSummary, MatchResult, MatchSummary,
    Scorecard,
};
