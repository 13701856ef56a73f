//! Shared plumbing: RNG, configuration, and the notification sink.

pub mod config;
pub mod notify;
pub mod rng;

pub use config::{
    BattleConfig, VerifierConfig, DEFAULT_MIN_SLUGS_REQUIRED, DEFAULT_OUTCOME_DELAY,
    DEFAULT_RESET_DELAY, ROSTER_SIZE,
};
pub use notify::{Notifier, RecordingNotifier, SilentNotifier, TracingNotifier};
pub use rng::{BattleRng, BattleRngState};
