//! Chain-facing side: account holdings, ownership verification, wallet
//! connection.
//!
//! ## Key Types
//!
//! - `AccountReader`: Collaborator that fetches an account's holdings
//! - `OwnershipVerifier`: Checks holdings against the slug allow-list
//! - `OwnershipRecord`: Which catalog slugs the wallet owns
//! - `AccessGrant`: Proof of a passing verification; required to start a
//!   `BattleSession`
//! - `WalletSession`: Explicitly owned wallet connection with lifecycle
//!   callbacks

pub mod ownership;
pub mod reader;
pub mod verifier;
pub mod wallet;

use serde::{Deserialize, Serialize};

pub use ownership::{AllowList, OwnershipRecord};
pub use reader::{AccountReader, InMemoryAccountReader};
pub use verifier::{AccessGrant, AccessState, OwnershipVerifier, VerificationReport};
pub use wallet::{WalletConnector, WalletSession};

/// Network the wallet lives on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainType {
    #[default]
    MainNet,
    TestNet,
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainType::MainNet => f.write_str("MainNet"),
            ChainType::TestNet => f.write_str("TestNet"),
        }
    }
}

/// One asset held by an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holding {
    pub asset_id: u64,
    pub amount: u64,
}

impl Holding {
    /// Create a new holding.
    #[must_use]
    pub const fn new(asset_id: u64, amount: u64) -> Self {
        Self { asset_id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_display() {
        assert_eq!(ChainType::MainNet.to_string(), "MainNet");
        assert_eq!(ChainType::TestNet.to_string(), "TestNet");
        assert_eq!(ChainType::default(), ChainType::MainNet);
    }

    #[test]
    fn test_holding_serde() {
        let holding = Holding::new(337_228_921, 1);
        let json = serde_json::to_string(&holding).unwrap();
        assert_eq!(json, r#"{"asset_id":337228921,"amount":1}"#);
    }
}
