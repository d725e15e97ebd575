//! Players and roster identifiers.

use serde::{Deserialize, Serialize};

use crate::core::MatchError;

/// Stamina every player starts a match with.
pub const FULL_STAMINA: u8 = 100;

/// Index of a player within its team's roster.
///
/// Player indices are 0-based: the first rostered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A cricketer's skill profile.
///
/// Skills are probabilities in `[0, 1]` and are fixed once the player is
/// created. Stamina is reserved for fatigue modelling and currently stays at
/// [`FULL_STAMINA`].
///
/// ```
/// use cricket_sim::squad::Player;
///
/// let player = Player::new("Player 1", 0.7, 0.1, 0.9, 0.7, 0.8).unwrap();
/// assert_eq!(player.batting(), 0.7);
/// assert_eq!(player.stamina(), 100);
///
/// assert!(Player::new("Player 2", 1.2, 0.1, 0.9, 0.7, 0.8).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    name: String,
    batting: f64,
    bowling: f64,
    fielding: f64,
    running: f64,
    experience: f64,
    stamina: u8,
}

impl Player {
    /// Create a player, rejecting any skill outside `[0, 1]`.
    pub fn new(
        name: impl Into<String>,
        batting: f64,
        bowling: f64,
        fielding: f64,
        running: f64,
        experience: f64,
    ) -> Result<Self, MatchError> {
        let name = name.into();

        for (attribute, value) in [
            ("batting", batting),
            ("bowling", bowling),
            ("fielding", fielding),
            ("running", running),
            ("experience", experience),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidSkillValue {
                    player: name,
                    attribute,
                    value,
                });
            }
        }

        Ok(Self {
            name,
            batting,
            bowling,
            fielding,
            running,
            experience,
            stamina: FULL_STAMINA,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Batting skill.
    #[must_use]
    pub fn batting(&self) -> f64 {
        self.batting
    }

    /// Bowling skill.
    #[must_use]
    pub fn bowling(&self) -> f64 {
        self.bowling
    }

    #[must_use]
    pub fn fielding(&self) -> f64 {
        self.fielding
    }

    #[must_use]
    pub fn running(&self) -> f64 {
        self.running
    }

    #[must_use]
    pub fn experience(&self) -> f64 {
        self.experience
    }

    /// Remaining stamina, `0..=100`.
    #[must_use]
    pub fn stamina(&self) -> u8 {
        self.stamina
    }
}

/// Wire form of a [`Player`]; deserialization goes through [`Player::new`].
#[derive(Deserialize)]
struct PlayerRecord {
    name: String,
    batting: f64,
    bowling: f64,
    fielding: f64,
    running: f64,
    experience: f64,
    stamina: u8,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = MatchError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let player = Player::new(
            record.name,
            record.batting,
            record.bowling,
            record.fielding,
            record.running,
            record.experience,
        )?;
        Ok(Self {
            stamina: record.stamina.min(FULL_STAMINA),
            ..player
        })
    }
}
