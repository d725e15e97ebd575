//! Ball outcome prediction and per-innings counters.
//!
//! ## Algorithm
//!
//! For each delivery:
//!
//! 1. `skill = batsman.batting * (1 - bowler.bowling)`
//! 2. draw `r` uniformly from `[0, 1)`
//! 3. if `r < exceptional_delivery_chance`, `skill *= exceptional_skill_factor`
//! 4. if `r < skill` the batsman is out, otherwise the ball scores runs
//!
//! The same draw decides both steps 3 and 4. Only a wicket mutates the
//! counters; run amounts are awarded by the caller.
//!
//! Callers must keep skills inside `[0, 1]` (guaranteed by
//! [`Player::new`](crate::squad::Player::new)); outside that range the
//! probability semantics break.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::outcome::Outcome;
use crate::core::{BallCount, BallRng, MatchConfig, Overs, Side, SideMap};
use crate::squad::Player;

/// Owns the per-innings scores, wickets and ball count, and decides each
/// delivery.
///
/// Counters are reset at every innings change with
/// [`reset_innings`](Self::reset_innings).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutcomePredictor {
    scores: SideMap<u32>,
    wickets: SideMap<u8>,
    balls: BallCount,

    balls_per_innings: u32,
    balls_per_over: u8,
    max_wickets: u8,
    exceptional_delivery_chance: f64,
    exceptional_skill_factor: f64,
}

impl OutcomePredictor {
    /// Create a predictor with zeroed counters.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            scores: SideMap::default(),
            wickets: SideMap::default(),
            balls: BallCount::ZERO,
            balls_per_innings: config.balls_per_innings(),
            balls_per_over: config.balls_per_over,
            max_wickets: config.max_wickets,
            exceptional_delivery_chance: config.exceptional_delivery_chance,
            exceptional_skill_factor: config.exceptional_skill_factor,
        }
    }

    /// Base probability of dismissal for this pairing.
    #[must_use]
    pub fn batting_skill(batsman: &Player, bowler: &Player) -> f64 {
        batsman.batting() * (1.0 - bowler.bowling())
    }

    /// Decide one delivery.
    ///
    /// On [`Outcome::Out`] the batting side's wicket count increases by one.
    pub fn predict_ball<R: BallRng + ?Sized>(
        &mut self,
        batsman: &Player,
        bowler: &Player,
        batting: Side,
        rng: &mut R,
    ) -> Outcome {
        let mut skill = Self::batting_skill(batsman, bowler);
        let draw = rng.next_unit();

        if draw < self.exceptional_delivery_chance {
            skill *= self.exceptional_skill_factor;
            trace!(batsman = batsman.name(), bowler = bowler.name(), "exceptional delivery");
        }

        if draw < skill {
            self.wickets[batting] += 1;
            Outcome::Out
        } else {
            Outcome::Runs
        }
    }

    /// True once the overs are used up or the batting side has lost its
    /// wickets.
    #[must_use]
    pub fn is_innings_over(&self, batting: Side) -> bool {
        self.balls.balls() >= self.balls_per_innings || self.wickets[batting] >= self.max_wickets
    }

    /// Add runs to a side's innings score.
    pub fn record_runs(&mut self, side: Side, runs: u32) {
        self.scores[side] += runs;
    }

    /// Count one delivery and return the new ball count.
    pub fn record_ball(&mut self) -> BallCount {
        self.balls = self.balls.next();
        self.balls
    }

    /// Zero scores, wickets and balls for a new innings.
    pub fn reset_innings(&mut self) {
        self.scores.reset();
        self.wickets.reset();
        self.balls = BallCount::ZERO;
    }

    /// Runs scored by a side this innings.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    /// Wickets lost by a side this innings.
    #[must_use]
    pub fn wickets(&self, side: Side) -> u8 {
        self.wickets[side]
    }

    /// Balls bowled this innings.
    #[must_use]
    pub fn balls(&self) -> BallCount {
        self.balls
    }

    /// Overs bowled this innings.
    #[must_use]
    pub fn overs(&self) -> Overs {
        self.balls.overs(self.balls_per_over)
    }
}
