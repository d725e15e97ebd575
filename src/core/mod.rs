//! Core match types: sides, ball counting, RNG, configuration, errors.
//!
//! Nothing here knows about players or rules; the squad and play modules
//! build on these.

pub mod rng;
pub mod config;
pub mod side;
pub mod overs;
pub mod error;

pub use rng::{BallRng, MatchRng, MatchRngState, ScriptedRng};
pub use config::{MatchConfig, MAX_BALLS_PER_OVER};
pub use side::{Side, SideMap};
pub use overs::{BallCount, Overs};
pub use error::MatchError;
