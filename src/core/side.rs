//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match has exactly two sides. `Side::Team1` bats first.
//!
//! ## SideMap
//!
//! Per-side storage with O(1) access, indexable by `Side`. Replaces
//! name-keyed dictionaries for scores and wickets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side that bats first.
    Team1,
    /// The side that bats second.
    Team2,
}

impl Side {
    /// Both sides, in batting order.
    pub const BOTH: [Side; 2] = [Side::Team1, Side::Team2];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Team1 => write!(f, "Team 1"),
            Side::Team2 => write!(f, "Team 2"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use cricket_sim::core::{Side, SideMap};
///
/// let mut runs: SideMap<u32> = SideMap::default();
/// runs[Side::Team2] += 4;
///
/// assert_eq!(runs[Side::Team1], 0);
/// assert_eq!(runs[Side::Team2], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    team1: T,
    team2: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            team1: factory(Side::Team1),
            team2: factory(Side::Team2),
        }
    }

    /// Create a SideMap from one value per side.
    pub fn from_parts(team1: T, team2: T) -> Self {
        Self { team1, team2 }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Team1 => &mut self.team1,
            Side::Team2 => &mut self.team2,
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl<T: Default> SideMap<T> {
    /// Reset both entries to their default value.
    pub fn reset(&mut self) {
        self.team1 = T::default();
        self.team2 = T::default();
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
