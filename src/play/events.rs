//! Structured match events.
//!
//! The controller never prints. Every state-changing call returns the events
//! it produced, in order, and a presentation layer subscribes through
//! [`EventSink`] to render them.

use serde::{Deserialize, Serialize};

use super::phase::Innings;
use super::summary::{InningsSummary, MatchSummary};
use crate::core::{BallCount, MatchError, Overs};
use crate::rules::Outcome;

/// One delivery as seen from the scorebox.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallReport {
    pub innings: Innings,
    /// Ball count after this delivery.
    pub ball: BallCount,
    pub overs: Overs,
    pub batsman: String,
    pub batting_team: String,
    pub bowler: String,
    pub bowling_team: String,
    pub outcome: Outcome,
    /// Runs scored off the ball, zero on a wicket.
    pub runs: u8,
    /// Innings score after this delivery.
    pub score: u32,
    /// Innings wickets after this delivery.
    pub wickets: u8,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// `start_match` succeeded.
    MatchStarted { team1: String, team2: String },

    /// A ball was bowled.
    BallBowled(BallReport),

    /// The last ball completed an over.
    OverCompleted {
        innings: Innings,
        overs: Overs,
        score: u32,
        wickets: u8,
    },

    /// An innings finished.
    InningsEnded(InningsSummary),

    /// The other side is now batting.
    InningsChanged { innings: Innings, batting_team: String },

    /// The match is over.
    MatchEnded(MatchSummary),
}

/// Receives match events as they are produced.
pub trait EventSink {
    /// Handle one event.
    fn on_event(&mut self, event: &MatchEvent) -> Result<(), MatchError>;

    /// Handle a batch of events in order.
    fn on_events(&mut self, events: &[MatchEvent]) -> Result<(), MatchError> {
        for event in events {
            self.on_event(event)?;
        }
        Ok(())
    }
}

/// Collects events for later inspection.
impl EventSink for Vec<MatchEvent> {
    fn on_event(&mut self, event: &MatchEvent) -> Result<(), MatchError> {
        self.push(event.clone());
        Ok(())
    }
}
