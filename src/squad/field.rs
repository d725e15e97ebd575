//! Ground and pitch conditions.
//!
//! A `Field` is carried through the match and exposed to callers, but the
//! outcome algorithm does not read it yet. It is the place to hang
//! condition-dependent rules.

use serde::{Deserialize, Serialize};

use crate::core::MatchError;

/// Size of the playing area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldSize {
    Small,
    Medium,
    Large,
}

/// Condition of the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchCondition {
    Dry,
    Green,
    Dusty,
    Flat,
    Wet,
}

/// Static environmental modifiers for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    size: FieldSize,
    fan_ratio: f64,
    pitch_conditions: PitchCondition,
    home_advantage: f64,
}

impl Field {
    /// Create field conditions.
    ///
    /// `fan_ratio` must lie in `[0, 1]` and `home_advantage` must be a
    /// positive multiplier.
    pub fn new(
        size: FieldSize,
        fan_ratio: f64,
        pitch_conditions: PitchCondition,
        home_advantage: f64,
    ) -> Result<Self, MatchError> {
        if !(0.0..=1.0).contains(&fan_ratio) {
            return Err(MatchError::InvalidField {
                reason: format!("fan ratio {fan_ratio} is outside 0.0..=1.0"),
            });
        }
        if !(home_advantage.is_finite() && home_advantage > 0.0) {
            return Err(MatchError::InvalidField {
                reason: format!("home advantage {home_advantage} must be positive"),
            });
        }

        Ok(Self {
            size,
            fan_ratio,
            pitch_conditions,
            home_advantage,
        })
    }

    #[must_use]
    pub fn size(&self) -> FieldSize {
        self.size
    }

    #[must_use]
    pub fn fan_ratio(&self) -> f64 {
        self.fan_ratio
    }

    #[must_use]
    pub fn pitch_conditions(&self) -> PitchCondition {
        self.pitch_conditions
    }

    #[must_use]
    pub fn home_advantage(&self) -> f64 {
        self.home_advantage
    }
}
