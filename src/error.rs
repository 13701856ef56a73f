//! Error and rejection types.
//!
//! Verifier and wallet errors describe failures at the external
//! boundary. Selection, attack and swap rejections are local and
//! recoverable: the session is left untouched when one is returned.

use thiserror::Error;

use crate::cards::CreatureId;

/// Failure reported by an `AccountReader`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not decode account information: {0}")]
    Decode(String),
}

/// Wallet verification failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Empty address; no external read was made.
    #[error("account address is empty")]
    InvalidAddress,
    /// The chain data provider failed. Retrying is safe.
    #[error("{0}")]
    ProviderFailure(#[from] ProviderError),
}

/// Wallet connection failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("connection request was rejected: {0}")]
    Rejected(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error("wallet transport error: {0}")]
    Transport(String),
}

/// Roster selection or battle start was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("You don't own {name}!")]
    NotOwned { name: String },
    #[error("You can only select {limit} Slugs!")]
    LimitReached { limit: usize },
    #[error("Select {missing} more Slug(s) to start the battle!")]
    NeedMore { missing: usize },
    #[error("no creature with id {0} in the catalog")]
    UnknownCreature(CreatureId),
    #[error("the battle has already started")]
    AlreadyPlaying,
}

/// Attack invocation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttackRejected {
    #[error("the battle has not started")]
    NotPlaying,
    #[error("a battle is already in progress")]
    BattleInProgress,
    #[error("{name} is no longer owned")]
    NotOwned { name: String },
    #[error("{name} has fainted")]
    Fainted { name: String },
    #[error("unknown attack {0:?}")]
    UnknownAttack(String),
    #[error("{attack} is cooling down ({remaining} turns left)")]
    CooldownActive { attack: String, remaining: u32 },
}

/// Active creature reassignment was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SwapRejected {
    #[error("the battle has not started")]
    NotPlaying,
    #[error("cannot switch during a battle")]
    BattleInProgress,
    #[error("roster slot {0} is already active")]
    AlreadyActive(usize),
    #[error("roster slot {index} is out of range (roster size {len})")]
    OutOfBounds { index: usize, len: usize },
}
