//! Integer ball counting.
//!
//! Balls are counted as an integer and overs are derived from the count,
//! so repeated deliveries never accumulate floating-point drift.

use serde::{Deserialize, Serialize};

/// Legal balls bowled in an innings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BallCount(pub u32);

impl BallCount {
    /// No balls bowled.
    pub const ZERO: BallCount = BallCount(0);

    /// Raw ball count.
    #[must_use]
    pub const fn balls(self) -> u32 {
        self.0
    }

    /// Count after one more ball.
    #[must_use]
    pub const fn next(self) -> BallCount {
        BallCount(self.0 + 1)
    }

    /// Derive the overs display for a given over length.
    #[must_use]
    pub const fn overs(self, balls_per_over: u8) -> Overs {
        let per_over = balls_per_over as u32;
        Overs {
            completed: self.0 / per_over,
            balls: (self.0 % per_over) as u8,
        }
    }

    /// True when this count closes an over.
    #[must_use]
    pub const fn completes_over(self, balls_per_over: u8) -> bool {
        self.0 > 0 && self.0 % balls_per_over as u32 == 0
    }
}

/// Overs in cricket notation: `12.3` is twelve overs and three balls.
///
/// The ball part prints as one digit only while `balls_per_over` is at most
/// [`MAX_BALLS_PER_OVER`](super::config::MAX_BALLS_PER_OVER), which
/// [`MatchConfig::validate`](super::MatchConfig::validate) enforces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Overs {
    /// Complete overs.
    pub completed: u32,
    /// Balls into the current over.
    pub balls: u8,
}

impl Overs {
    /// Overs as a decimal, `completed + balls / 10`.
    #[must_use]
    pub fn as_decimal(self) -> f64 {
        f64::from(self.completed) + f64::from(self.balls) / 10.0
    }
}

impl std::fmt::Display for Overs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}
