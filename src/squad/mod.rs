//! Squad data: players, teams and the field they play on.
//!
//! These are value containers. All validation happens at construction, so
//! the rules and play modules can rely on:
//!
//! - every skill lying in `[0, 1]`
//! - every team having at least one player
//! - batting orders naming rostered players at most once

pub mod player;
pub mod team;
pub mod field;

pub use player::{Player, PlayerId, FULL_STAMINA};
pub use team::{BattingOrder, Team};
pub use field::{Field, FieldSize, PitchCondition};
