//! Configuration types.
//!
//! Both components are configured at construction and never read the
//! environment:
//! - `VerifierConfig`: ownership pass threshold
//! - `BattleConfig`: roster size, outcome odds, animation delays, and
//!   what an outcome does to creature health
//!
//! `ROSTER_SIZE` and `DEFAULT_MIN_SLUGS_REQUIRED` are separate product
//! parameters. A wallet passes verification with one slug, but a roster
//! needs three creatures; neither value is derived from the other.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::battle::OutcomeEffect;

/// Number of creatures a roster must contain before battle can start.
pub const ROSTER_SIZE: usize = 3;

/// Minimum number of qualifying slugs a wallet must hold to pass verification.
pub const DEFAULT_MIN_SLUGS_REQUIRED: usize = 1;

/// Default delay between invoking an attack and drawing its outcome.
pub const DEFAULT_OUTCOME_DELAY: Duration = Duration::from_millis(500);

/// Default delay between showing an outcome and clearing it.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1500);

/// Ownership verifier configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Qualifying slugs required to pass.
    pub min_slugs_required: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            min_slugs_required: DEFAULT_MIN_SLUGS_REQUIRED,
        }
    }
}

impl VerifierConfig {
    /// Create the default configuration (threshold of 1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass threshold.
    #[must_use]
    pub fn with_min_slugs_required(mut self, count: usize) -> Self {
        self.min_slugs_required = count;
        self
    }
}

/// Battle session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Exact roster size required to start playing.
    pub roster_size: usize,

    /// Probability that a resolved attack is a victory.
    pub win_probability: f64,

    /// Delay from attack invocation until the outcome is drawn.
    pub outcome_delay: Duration,

    /// Delay from outcome display until the cycle resets.
    pub reset_delay: Duration,

    /// What an outcome does to creature health.
    pub outcome_effect: OutcomeEffect,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            roster_size: ROSTER_SIZE,
            win_probability: 0.5,
            outcome_delay: DEFAULT_OUTCOME_DELAY,
            reset_delay: DEFAULT_RESET_DELAY,
            outcome_effect: OutcomeEffect::Cosmetic,
            seed: None,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required roster size.
    ///
    /// Panics on zero: a session with an empty roster has no active creature.
    #[must_use]
    pub fn with_roster_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Roster must hold at least 1 creature");
        self.roster_size = size;
        self
    }

    /// Set the victory probability (clamped to `[0, 1]` when drawn).
    #[must_use]
    pub fn with_win_probability(mut self, probability: f64) -> Self {
        self.win_probability = probability;
        self
    }

    /// Set both resolution delays.
    #[must_use]
    pub fn with_delays(mut self, outcome: Duration, reset: Duration) -> Self {
        self.outcome_delay = outcome;
        self.reset_delay = reset;
        self
    }

    /// Set the outcome effect.
    #[must_use]
    pub fn with_outcome_effect(mut self, effect: OutcomeEffect) -> Self {
        self.outcome_effect = effect;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
