//! Seedable random number generation for battle outcomes.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical outcome sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use slug_battle::core::BattleRng;
//!
//! let mut a = BattleRng::new(7);
//! let mut b = BattleRng::new(7);
//! assert_eq!(a.chance(0.5), b.chance(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used to draw simulated battle outcomes.
///
/// Uses ChaCha8 so a session seeded in a test replays identically.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform value in `[0, 1)` and compare it against `probability`.
    ///
    /// Out-of-range probabilities are clamped, so `0.0` never succeeds
    /// and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        let p = probability.clamp(0.0, 1.0);
        self.inner.gen::<f64>() < p
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many outcomes have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.chance(0.5), rng2.chance(0.5));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = BattleRng::new(9);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            assert!(rng.chance(3.0));
            assert!(!rng.chance(-1.0));
        }
    }

    #[test]
    fn test_chance_is_roughly_fair() {
        let mut rng = BattleRng::new(1234);
        let wins = (0..2000).filter(|_| rng.chance(0.5)).count();
        assert!((800..1200).contains(&wins), "wins = {wins}");
    }

    #[test]
    fn test_state_restore() {
        let mut rng = BattleRng::new(42);
        for _ in 0..37 {
            rng.chance(0.5);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..20).map(|_| rng.chance(0.5)).collect();

        let mut restored = BattleRng::from_state(&state);
        let actual: Vec<_> = (0..20).map(|_| restored.chance(0.5)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = BattleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
