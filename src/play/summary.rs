//! Innings summaries, scorecards and the match result.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::phase::Innings;
use crate::core::{BallCount, Overs, Side, SideMap};
use crate::rules::Outcome;
use crate::squad::{PlayerId, Team};

/// Why an innings finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InningsEndReason {
    /// The over limit was reached.
    OversExhausted,
    /// The wicket limit was reached.
    AllOut,
    /// Every batsman in the order had faced a ball.
    BattingOrderExhausted,
}

/// A batsman's contribution to an innings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingFigures {
    pub runs: u32,
    pub balls: u32,
    pub dismissed: bool,
}

/// A bowler's contribution to an innings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

/// Per-player figures for one innings.
///
/// Batting figures are keyed by the batting side's roster ids, bowling
/// figures by the fielding side's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    batting: FxHashMap<PlayerId, BattingFigures>,
    bowling: FxHashMap<PlayerId, BowlingFigures>,
}

impl Scorecard {
    /// Create an empty scorecard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one delivery to its batsman and bowler.
    pub fn record_delivery(
        &mut self,
        batsman: PlayerId,
        bowler: PlayerId,
        outcome: Outcome,
        runs: u8,
    ) {
        let runs = u32::from(runs);

        let batting = self.batting.entry(batsman).or_default();
        batting.balls += 1;
        batting.runs += runs;

        let bowling = self.bowling.entry(bowler).or_default();
        bowling.balls += 1;
        bowling.runs_conceded += runs;

        if outcome.is_wicket() {
            batting.dismissed = true;
            bowling.wickets += 1;
        }
    }

    #[must_use]
    pub fn batting(&self, batsman: PlayerId) -> Option<&BattingFigures> {
        self.batting.get(&batsman)
    }

    #[must_use]
    pub fn bowling(&self, bowler: PlayerId) -> Option<&BowlingFigures> {
        self.bowling.get(&bowler)
    }

    /// Batsmen who faced at least one ball, in roster order.
    #[must_use]
    pub fn batsmen(&self) -> Vec<(PlayerId, BattingFigures)> {
        let mut batsmen: Vec<_> = self
            .batting
            .iter()
            .map(|(&id, &figures)| (id, figures))
            .collect();
        batsmen.sort_by_key(|(id, _)| *id);
        batsmen
    }

    /// Sum of runs credited to batsmen.
    #[must_use]
    pub fn total_runs(&self) -> u32 {
        self.batting.values().map(|f| f.runs).sum()
    }
}

/// The record of a completed innings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub innings: Innings,
    /// The side that batted.
    pub side: Side,
    pub team: String,
    pub runs: u32,
    pub wickets: u8,
    pub balls: BallCount,
    pub overs: Overs,
    pub reason: InningsEndReason,
    pub scorecard: Scorecard,
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// One side scored more runs.
    Won {
        winner: Side,
        winner_name: String,
        /// Run difference.
        margin: u32,
    },
    /// Both sides scored the same.
    Tie,
}

impl MatchResult {
    /// Compare the match totals of both sides.
    #[must_use]
    pub fn from_teams(teams: &SideMap<Team>) -> Self {
        let first = teams[Side::Team1].total_runs();
        let second = teams[Side::Team2].total_runs();

        let (winner, margin) = match first.cmp(&second) {
            std::cmp::Ordering::Greater => (Side::Team1, first - second),
            std::cmp::Ordering::Less => (Side::Team2, second - first),
            std::cmp::Ordering::Equal => return MatchResult::Tie,
        };

        MatchResult::Won {
            winner,
            winner_name: teams[winner].name().to_string(),
            margin,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match self {
            MatchResult::Won { winner, .. } => *winner == side,
            MatchResult::Tie => false,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, MatchResult::Tie)
    }
}

/// Everything reported when a match ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Completed innings in the order they were played.
    pub innings: Vec<InningsSummary>,
    pub result: MatchResult,
}

impl MatchSummary {
    /// The innings a side batted in.
    #[must_use]
    pub fn innings_of(&self, side: Side) -> Option<&InningsSummary> {
        self.innings.iter().find(|summary| summary.side == side)
    }
}
