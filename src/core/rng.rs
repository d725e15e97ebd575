//! Deterministic random number generation for ball outcomes.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: The controller draws through the [`BallRng`] trait
//! - **Serializable**: O(1) state capture and restore
//! - **Scripted**: [`ScriptedRng`] replays a fixed draw sequence
//!
//! ## Usage
//!
//! ```
//! use cricket_sim::core::{BallRng, MatchRng};
//!
//! let mut rng1 = MatchRng::new(42);
//! let mut rng2 = MatchRng::new(42);
//!
//! // Same seed, same deliveries
//! assert_eq!(rng1.next_unit(), rng2.next_unit());
//! assert_eq!(rng1.next_runs(6), rng2.next_runs(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::MatchError;

/// Source of randomness consumed by the outcome predictor and the ball loop.
///
/// A match draws from a single stream in a fixed order: one unit draw per
/// delivery, then one run draw only when the delivery was not a wicket.
pub trait BallRng {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `0..=max`.
    fn next_runs(&mut self, max: u8) -> u8;
}

impl<R: BallRng + ?Sized> BallRng for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_runs(&mut self, max: u8) -> u8 {
        (**self).next_runs(max)
    }
}

/// Seeded match RNG.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl BallRng for MatchRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_runs(&mut self, max: u8) -> u8 {
        self.inner.gen_range(0..=max)
    }
}

/// Serializable RNG state for checkpointing a match mid-innings.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many balls have been bowled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws.
///
/// Unit draws and run draws come from two independent scripts; each cycles
/// back to its start once exhausted. Run draws are clamped to the requested
/// maximum.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    units: Vec<f64>,
    runs: Vec<u8>,
    unit_cursor: usize,
    runs_cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source.
    ///
    /// Every unit draw must lie in `[0, 1)`. An empty run script always
    /// yields zero runs.
    pub fn new(units: Vec<f64>, runs: Vec<u8>) -> Result<Self, MatchError> {
        if units.is_empty() {
            return Err(MatchError::EmptyScript);
        }
        if let Some(&bad) = units.iter().find(|u| !(0.0..1.0).contains(*u)) {
            return Err(MatchError::InvalidConfig {
                reason: format!("scripted draw {bad} is outside [0, 1)"),
            });
        }

        Ok(Self {
            units,
            runs,
            unit_cursor: 0,
            runs_cursor: 0,
        })
    }

    /// A source that returns the same draw and run value forever.
    pub fn constant(unit: f64, runs: u8) -> Result<Self, MatchError> {
        Self::new(vec![unit], vec![runs])
    }

    /// Number of unit draws taken so far.
    #[must_use]
    pub fn units_drawn(&self) -> usize {
        self.unit_cursor
    }

    /// Number of run draws taken so far.
    #[must_use]
    pub fn runs_drawn(&self) -> usize {
        self.runs_cursor
    }
}

impl BallRng for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        value
    }

    fn next_runs(&mut self, max: u8) -> u8 {
        if self.runs.is_empty() {
            return 0;
        }
        let value = self.runs[self.runs_cursor % self.runs.len()];
        self.runs_cursor += 1;
        value.min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_unit(), rng2.next_unit());
            assert_eq!(rng1.next_runs(6), rng2.next_runs(6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MatchRng::new(1);
        let mut rng2 = MatchRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_unit()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_unit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_ranges() {
        let mut rng = MatchRng::new(7);

        for _ in 0..1000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
            assert!(rng.next_runs(6) <= 6);
        }
    }

    #[test]
    fn test_every_run_value_reachable() {
        let mut rng = MatchRng::new(3);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            seen[rng.next_runs(6) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = MatchRng::new(42);

        for _ in 0..100 {
            rng.next_unit();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_runs(6)).collect();

        let mut restored = MatchRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_runs(6)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9], vec![4, 9]).unwrap();

        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.units_drawn(), 3);

        assert_eq!(rng.next_runs(6), 4);
        // Clamped to the requested maximum
        assert_eq!(rng.next_runs(6), 6);
        assert_eq!(rng.runs_drawn(), 2);
    }

    #[test]
    fn test_scripted_rejects_bad_script() {
        assert!(matches!(ScriptedRng::new(vec![], vec![1]), Err(MatchError::EmptyScript)));
        assert!(matches!(
            ScriptedRng::new(vec![1.0], vec![]),
            Err(MatchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_scripted_empty_runs() {
        let mut rng = ScriptedRng::new(vec![0.5], vec![]).unwrap();
        assert_eq!(rng.next_runs(6), 0);
    }

    #[test]
    fn test_through_mut_reference() {
        fn bowl<R: BallRng>(mut rng: R) -> (f64, u8) {
            (rng.next_unit(), rng.next_runs(6))
        }

        let mut rng = ScriptedRng::constant(0.25, 3).unwrap();
        assert_eq!(bowl(&mut rng), (0.25, 3));
        assert_eq!(rng.units_drawn(), 1);
    }
}
