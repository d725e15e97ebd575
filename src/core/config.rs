//! Match configuration parameters.

use std::env;

use serde::{Deserialize, Serialize};

use super::error::MatchError;

/// Largest over length whose ball part still prints as one digit.
pub const MAX_BALLS_PER_OVER: u8 = 10;

/// Match configuration parameters.
///
/// Defaults describe a fifty-over, ten-wicket match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Overs per innings. The innings ends once this many overs are bowled.
    pub max_overs: u32,

    /// Wickets that end an innings.
    pub max_wickets: u8,

    /// Balls per over, `1..=MAX_BALLS_PER_OVER`. Over displays such as
    /// `"12.3"` rely on the ball part being a single digit.
    pub balls_per_over: u8,

    /// Chance that a delivery is exceptional (default: 0.05).
    pub exceptional_delivery_chance: f64,

    /// Multiplier applied to the batting skill on an exceptional delivery
    /// (default: 0.2).
    pub exceptional_skill_factor: f64,

    /// Highest run value a single scoring ball can produce (inclusive).
    pub max_runs_per_ball: u8,

    /// Random seed for the match RNG.
    /// Same seed produces the same match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_overs: 50,
            max_wickets: 10,
            balls_per_over: 6,
            exceptional_delivery_chance: 0.05,
            exceptional_skill_factor: 0.2,
            max_runs_per_ball: 6,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build configuration from the defaults overlaid with environment variables.
    ///
    /// Environment variables:
    /// - `CRICKET_SEED` - RNG seed (default: 42)
    /// - `CRICKET_MAX_OVERS` - overs per innings (default: 50)
    /// - `CRICKET_MAX_WICKETS` - wickets per innings (default: 10)
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("CRICKET_SEED") {
            config.seed = seed;
        }
        if let Some(overs) = read_env::<u32>("CRICKET_MAX_OVERS") {
            config.max_overs = overs;
        }
        if let Some(wickets) = read_env::<u8>("CRICKET_MAX_WICKETS") {
            config.max_wickets = wickets;
        }

        config
    }

    /// Set the overs per innings.
    pub fn with_max_overs(mut self, overs: u32) -> Self {
        self.max_overs = overs;
        self
    }

    /// Set the wickets per innings.
    pub fn with_max_wickets(mut self, wickets: u8) -> Self {
        self.max_wickets = wickets;
        self
    }

    /// Set the balls per over.
    pub fn with_balls_per_over(mut self, balls: u8) -> Self {
        self.balls_per_over = balls;
        self
    }

    /// Set the exceptional delivery chance and skill factor.
    pub fn with_exceptional_delivery(mut self, chance: f64, factor: f64) -> Self {
        self.exceptional_delivery_chance = chance;
        self.exceptional_skill_factor = factor;
        self
    }

    /// Set the highest run value per ball.
    pub fn with_max_runs_per_ball(mut self, runs: u8) -> Self {
        self.max_runs_per_ball = runs;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Balls in a full innings, saturating at `u32::MAX`.
    #[must_use]
    pub fn balls_per_innings(&self) -> u32 {
        self.max_overs.saturating_mul(u32::from(self.balls_per_over))
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), MatchError> {
        let invalid = |reason: &str| {
            Err(MatchError::InvalidConfig {
                reason: reason.to_string(),
            })
        };

        if self.max_overs == 0 {
            return invalid("max_overs must be at least 1");
        }
        if self.max_wickets == 0 {
            return invalid("max_wickets must be at least 1");
        }
        if !(1..=MAX_BALLS_PER_OVER).contains(&self.balls_per_over) {
            return invalid("balls_per_over must be within 1..=10");
        }
        if self
            .max_overs
            .checked_mul(u32::from(self.balls_per_over))
            .is_none()
        {
            return invalid("max_overs * balls_per_over overflows the ball counter");
        }
        if !(0.0..=1.0).contains(&self.exceptional_delivery_chance) {
            return invalid("exceptional_delivery_chance must be within 0.0..=1.0");
        }
        if !(0.0..=1.0).contains(&self.exceptional_skill_factor) {
            return invalid("exceptional_skill_factor must be within 0.0..=1.0");
        }

        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
