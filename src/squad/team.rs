//! Teams: roster, batting order, captain and running totals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId};
use crate::core::MatchError;

/// Batting order storage. Eleven batsmen fit inline.
pub type BattingOrder = SmallVec<[PlayerId; 11]>;

/// A team in a match.
///
/// The roster is fixed at creation. The batting order is assigned afterwards
/// with [`Team::set_batting_order`] (or the `with_*` builders) and must name
/// at least one rostered player.
///
/// `total_runs`, `total_wickets` and the batsman cursor are only mutated by
/// the match controller.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TeamRecord")]
pub struct Team {
    name: String,
    players: Vec<Player>,
    batting_order: BattingOrder,
    captain: Option<PlayerId>,
    total_runs: u32,
    total_wickets: u8,
    current_batsman_index: usize,
}

impl Team {
    /// Create a team with an empty batting order.
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Result<Self, MatchError> {
        let name = name.into();

        if players.is_empty() {
            return Err(MatchError::EmptyRoster { team: name });
        }
        if players.len() > usize::from(u8::MAX) {
            return Err(MatchError::RosterTooLarge {
                team: name,
                size: players.len(),
            });
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.name() == player.name()) {
                return Err(MatchError::DuplicatePlayerName {
                    team: name,
                    name: player.name().to_string(),
                });
            }
        }

        Ok(Self {
            name,
            players,
            batting_order: BattingOrder::new(),
            captain: None,
            total_runs: 0,
            total_wickets: 0,
            current_batsman_index: 0,
        })
    }

    /// Set the batting order and return the team.
    pub fn with_batting_order(
        mut self,
        order: impl IntoIterator<Item = PlayerId>,
    ) -> Result<Self, MatchError> {
        self.set_batting_order(order)?;
        Ok(self)
    }

    /// Bat in roster order.
    pub fn with_roster_batting_order(self) -> Result<Self, MatchError> {
        let order = self.player_ids().collect::<Vec<_>>();
        self.with_batting_order(order)
    }

    /// Replace the batting order.
    ///
    /// The order must be non-empty, name only rostered players, and name
    /// each at most once. It may leave players out.
    pub fn set_batting_order(
        &mut self,
        order: impl IntoIterator<Item = PlayerId>,
    ) -> Result<(), MatchError> {
        let order: BattingOrder = order.into_iter().collect();

        if order.is_empty() {
            return Err(MatchError::EmptyBattingOrder {
                team: self.name.clone(),
            });
        }
        for (i, &id) in order.iter().enumerate() {
            self.check_rostered(id)?;
            if order[..i].contains(&id) {
                return Err(MatchError::DuplicateBatsman {
                    team: self.name.clone(),
                    player: id.index(),
                });
            }
        }

        self.batting_order = order;
        self.current_batsman_index = 0;
        Ok(())
    }

    /// Appoint a captain from the roster.
    pub fn set_captain(&mut self, captain: PlayerId) -> Result<(), MatchError> {
        self.check_rostered(captain)?;
        self.captain = Some(captain);
        Ok(())
    }

    /// Appoint a captain and return the team.
    pub fn with_captain(mut self, captain: PlayerId) -> Result<Self, MatchError> {
        self.set_captain(captain)?;
        Ok(self)
    }

    fn check_rostered(&self, id: PlayerId) -> Result<(), MatchError> {
        if id.index() < self.players.len() {
            Ok(())
        } else {
            Err(MatchError::UnknownPlayer {
                team: self.name.clone(),
                player: id.index(),
            })
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full roster in selection order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a rostered player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Iterate over all roster ids.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId)
    }

    #[must_use]
    pub fn batting_order(&self) -> &[PlayerId] {
        &self.batting_order
    }

    #[must_use]
    pub fn captain(&self) -> Option<PlayerId> {
        self.captain
    }

    /// Runs scored by this team across the match.
    #[must_use]
    pub fn total_runs(&self) -> u32 {
        self.total_runs
    }

    /// Wickets lost by this team across the match.
    #[must_use]
    pub fn total_wickets(&self) -> u8 {
        self.total_wickets
    }

    /// Cursor into the batting order.
    #[must_use]
    pub fn current_batsman_index(&self) -> usize {
        self.current_batsman_index
    }

    /// The batsman at the cursor, if the cursor is still inside the order.
    #[must_use]
    pub fn current_batsman(&self) -> Option<PlayerId> {
        self.batting_order.get(self.current_batsman_index).copied()
    }

    /// The player who opens the bowling for this side.
    #[must_use]
    pub fn opening_bowler(&self) -> PlayerId {
        PlayerId(0)
    }

    // === Controller mutation ===

    pub(crate) fn add_runs(&mut self, runs: u32) {
        self.total_runs += runs;
    }

    pub(crate) fn add_wicket(&mut self) {
        self.total_wickets += 1;
    }

    /// Move the cursor to the next batsman. Returns `false` once the order
    /// is exhausted.
    pub(crate) fn advance_batsman(&mut self) -> bool {
        self.current_batsman_index += 1;
        self.current_batsman_index < self.batting_order.len()
    }

    pub(crate) fn reset_batsman(&mut self) {
        self.current_batsman_index = 0;
    }

    /// Clear totals and cursor left over from an earlier match.
    pub(crate) fn reset_for_match(&mut self) {
        self.total_runs = 0;
        self.total_wickets = 0;
        self.current_batsman_index = 0;
    }
}

/// Wire form of a [`Team`]; deserialization re-runs the roster, batting
/// order and captain checks.
#[derive(Deserialize)]
struct TeamRecord {
    name: String,
    players: Vec<Player>,
    batting_order: BattingOrder,
    captain: Option<PlayerId>,
    total_runs: u32,
    total_wickets: u8,
    current_batsman_index: usize,
}

impl TryFrom<TeamRecord> for Team {
    type Error = MatchError;

    fn try_from(record: TeamRecord) -> Result<Self, Self::Error> {
        let mut team = Team::new(record.name, record.players)?;
        if !record.batting_order.is_empty() {
            team.set_batting_order(record.batting_order)?;
        }
        if let Some(captain) = record.captain {
            team.set_captain(captain)?;
        }
        team.total_runs = record.total_runs;
        team.total_wickets = record.total_wickets;
        team.current_batsman_index = record.current_batsman_index.min(team.batting_order.len());
        Ok(team)
    }
}
