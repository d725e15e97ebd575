//! Ball-by-ball rules.
//!
//! The `OutcomePredictor` decides every delivery and owns the per-innings
//! counters the match controller reads to detect the end of an innings.

pub mod outcome;
pub mod predictor;

pub use outcome::Outcome;
pub use predictor::OutcomePredictor;
