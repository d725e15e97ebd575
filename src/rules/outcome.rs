//! Per-ball outcomes.

use serde::{Deserialize, Serialize};

/// What a single delivery produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The batsman was dismissed.
    Out,
    /// The batsman survived; the run value is drawn separately.
    Runs,
}

impl Outcome {
    #[must_use]
    pub fn is_wicket(self) -> bool {
        self == Outcome::Out
    }
}
