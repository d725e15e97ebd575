//! Short commentary phrases.

use crate::play::InningsEndReason;
use crate::rules::Outcome;

/// Maps outcomes to the commentator's call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator;

impl Narrator {
    /// The call for a delivery.
    #[must_use]
    pub fn commentary(outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Out => "Wicket!",
            Outcome::Runs => "Runs scored!",
        }
    }

    /// How an innings closed.
    #[must_use]
    pub fn innings_close(reason: InningsEndReason) -> &'static str {
        match reason {
            InningsEndReason::OversExhausted => "overs complete",
            InningsEndReason::AllOut => "all out",
            InningsEndReason::BattingOrderExhausted => "batting order exhausted",
        }
    }
}
