//! Account holdings collaborator.
//!
//! The real implementation talks to a chain indexer; the crate only
//! depends on this trait. `InMemoryAccountReader` serves fixed holdings
//! and counts reads, which is enough for tests and offline play.

use std::cell::Cell;
use std::future::Future;

use rustc_hash::FxHashMap;

use super::{ChainType, Holding};
use crate::error::ProviderError;

/// Fetches the current holdings of an account.
///
/// One call is one round trip to the provider.
pub trait AccountReader {
    /// All assets held by `address` on `chain`.
    fn account_holdings(
        &self,
        address: &str,
        chain: ChainType,
    ) -> impl Future<Output = Result<Vec<Holding>, ProviderError>>;
}

/// Serves holdings from memory.
///
/// Unknown accounts hold nothing. A configured failure is returned by
/// every read until cleared.
#[derive(Debug, Default)]
pub struct InMemoryAccountReader {
    accounts: FxHashMap<(String, ChainType), Vec<Holding>>,
    failure: Option<ProviderError>,
    reads: Cell<usize>,
}

impl InMemoryAccountReader {
    /// Create a reader with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add holdings for an account (builder pattern).
    #[must_use]
    pub fn with_account(
        mut self,
        address: impl Into<String>,
        chain: ChainType,
        holdings: impl IntoIterator<Item = Holding>,
    ) -> Self {
        self.set_account(address, chain, holdings);
        self
    }

    /// Replace the holdings of an account.
    pub fn set_account(
        &mut self,
        address: impl Into<String>,
        chain: ChainType,
        holdings: impl IntoIterator<Item = Holding>,
    ) {
        self.accounts
            .insert((address.into(), chain), holdings.into_iter().collect());
    }

    /// Make every subsequent read fail with `error`.
    pub fn fail_with(&mut self, error: ProviderError) {
        self.failure = Some(error);
    }

    /// Stop failing reads.
    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    /// Number of reads served (including failed ones).
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl AccountReader for InMemoryAccountReader {
    async fn account_holdings(
        &self,
        address: &str,
        chain: ChainType,
    ) -> Result<Vec<Holding>, ProviderError> {
        self.reads.set(self.reads.get() + 1);

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(self
            .accounts
            .get(&(address.to_string(), chain))
            .cloned()
            .unwrap_or_default())
    }
}
