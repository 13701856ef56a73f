//! # slug-battle
//!
//! A wallet-gated card battle between slug creatures.
//!
//! ## Flow
//!
//! 1. A `WalletSession` connects and yields an account address.
//! 2. `OwnershipVerifier` reads the account's holdings once and checks
//!    them against the slug allow-list. A passing check yields an
//!    `AccessGrant`.
//! 3. A `BattleSession` is created from the grant. The player picks a
//!    roster of owned slugs, then attacks; each attack runs a timed
//!    resolution cycle with a simulated outcome and per-attack cooldowns.
//!
//! Chain access and wallet connectivity stay behind the `AccountReader`
//! and `WalletConnector` traits; user-visible status lines go to a
//! `Notifier`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, notification sink
//! - `cards`: Creature kinds, images, definitions, catalog
//! - `chain`: Holdings, verification, ownership, wallet session
//! - `battle`: Session state machine and resolution pipeline
//! - `error`: Error and rejection types

pub mod battle;
pub mod cards;
pub mod chain;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleRng, Notifier, RecordingNotifier, TracingNotifier, VerifierConfig,
    DEFAULT_MIN_SLUGS_REQUIRED, ROSTER_SIZE,
};

pub use crate::cards::{Attack, Catalog, Creature, CreatureId, CreatureKind, ImageAsset};

pub use crate::chain::{
    AccessGrant, AccessState, AccountReader, AllowList, ChainType, Holding,
    InMemoryAccountReader, OwnershipRecord, OwnershipVerifier, VerificationReport,
    WalletConnector, WalletSession,
};

pub use crate::battle::{
    BattleResult, BattleSession, BattleView, OutcomeEffect, Phase, ResolutionPipeline,
    SelectionChange,
};

pub use crate::error::{
    AttackRejected, ProviderError, SelectionRejected, SwapRejected, VerificationError,
    WalletError,
};
