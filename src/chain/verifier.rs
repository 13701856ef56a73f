//! Wallet ownership verification.
//!
//! `OwnershipVerifier` makes one read against an `AccountReader` and
//! checks each holding against the `AllowList`. A holding qualifies only
//! when its amount is strictly positive. Verification is a pure query,
//! so repeating it is safe and, for unchanged holdings, gives the same
//! answer.
//!
//! ## Example
//!
//! ```
//! use slug_battle::cards::CreatureKind;
//! use slug_battle::chain::{ChainType, Holding, InMemoryAccountReader, OwnershipVerifier};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let reader = InMemoryAccountReader::new().with_account(
//!     "ADDR",
//!     ChainType::MainNet,
//!     [Holding::new(CreatureKind::Slugger.asset_id(), 1)],
//! );
//! let verifier = OwnershipVerifier::new(reader);
//!
//! assert_eq!(verifier.verify("ADDR", ChainType::MainNet).await, Ok(true));
//! # });
//! ```

use super::ownership::{AllowList, OwnershipRecord};
use super::reader::AccountReader;
use super::ChainType;
use crate::cards::CreatureKind;
use crate::core::{Notifier, VerifierConfig};
use crate::error::VerificationError;

/// Outcome of inspecting one wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationReport {
    address: String,
    chain: ChainType,
    total_assets: usize,
    qualifying: Vec<CreatureKind>,
    zero_balance: Vec<CreatureKind>,
    required: usize,
}

impl VerificationReport {
    /// The inspected address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The inspected chain.
    #[must_use]
    pub fn chain(&self) -> ChainType {
        self.chain
    }

    /// Number of assets in the wallet, slug or not.
    #[must_use]
    pub fn total_assets(&self) -> usize {
        self.total_assets
    }

    /// Slugs held with a positive amount.
    #[must_use]
    pub fn qualifying(&self) -> &[CreatureKind] {
        &self.qualifying
    }

    /// Slugs present in the wallet with a zero amount.
    #[must_use]
    pub fn zero_balance(&self) -> &[CreatureKind] {
        &self.zero_balance
    }

    /// Threshold this report was judged against.
    #[must_use]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Check if enough qualifying slugs were found.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.qualifying.len() >= self.required
    }

    /// Ownership of every catalog slug according to this report.
    #[must_use]
    pub fn ownership(&self) -> OwnershipRecord {
        OwnershipRecord::from_kinds(self.qualifying.iter().copied())
    }

    /// Convert a passing report into an access grant.
    #[must_use]
    pub fn grant(&self) -> Option<AccessGrant> {
        self.passed().then(|| AccessGrant {
            address: self.address.clone(),
            chain: self.chain,
            ownership: self.ownership(),
        })
    }
}

/// Proof that a wallet passed verification.
///
/// Only a passing `VerificationReport` can produce one, and a
/// `BattleSession` can only be started from one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGrant {
    address: String,
    chain: ChainType,
    ownership: OwnershipRecord,
}

impl AccessGrant {
    /// The verified address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The verified chain.
    #[must_use]
    pub fn chain(&self) -> ChainType {
        self.chain
    }

    /// Slugs owned at verification time.
    #[must_use]
    pub fn ownership(&self) -> &OwnershipRecord {
        &self.ownership
    }
}

/// Result of the user-facing access check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessState {
    Granted(AccessGrant),
    /// Verification failed or found too few slugs. No play is allowed.
    Denied { reason: String },
}

impl AccessState {
    /// Check if access was granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessState::Granted(_))
    }

    /// The grant, if access was granted.
    #[must_use]
    pub fn into_grant(self) -> Option<AccessGrant> {
        match self {
            AccessState::Granted(grant) => Some(grant),
            AccessState::Denied { .. } => None,
        }
    }
}

/// Checks a wallet's holdings against the slug allow-list.
#[derive(Debug)]
pub struct OwnershipVerifier<R> {
    reader: R,
    allow_list: AllowList,
    config: VerifierConfig,
}

impl<R: AccountReader> OwnershipVerifier<R> {
    /// Create a verifier with the standard allow-list and default threshold.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            allow_list: AllowList::standard(),
            config: VerifierConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the allow-list.
    #[must_use]
    pub fn with_allow_list(mut self, allow_list: AllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    /// The underlying reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Mutable access to the underlying reader.
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// The active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Check if `address` holds enough slugs on `chain`.
    ///
    /// `Ok(false)` means the wallet was read and came up short; an `Err`
    /// means it could not be read at all.
    pub async fn verify(&self, address: &str, chain: ChainType) -> Result<bool, VerificationError> {
        self.inspect(address, chain).await.map(|report| report.passed())
    }

    /// Read the wallet and report what was found.
    pub async fn inspect(
        &self,
        address: &str,
        chain: ChainType,
    ) -> Result<VerificationReport, VerificationError> {
        if address.trim().is_empty() {
            tracing::error!("account address is empty");
            return Err(VerificationError::InvalidAddress);
        }

        tracing::info!(
            %chain,
            required = self.config.min_slugs_required,
            "checking wallet {address} for slugs"
        );

        let holdings = self
            .reader
            .account_holdings(address, chain)
            .await
            .inspect_err(|e| tracing::error!("error checking wallet for slugs: {e}"))?;

        let mut qualifying = Vec::new();
        let mut zero_balance = Vec::new();

        for holding in &holdings {
            let Some(kind) = self.allow_list.kind_of(holding.asset_id) else {
                continue;
            };
            if holding.amount > 0 {
                tracing::debug!(asset_id = holding.asset_id, "found valid slug: {kind}");
                if !qualifying.contains(&kind) {
                    qualifying.push(kind);
                }
            } else {
                tracing::debug!(asset_id = holding.asset_id, "found slug but amount is 0: {kind}");
                if !zero_balance.contains(&kind) {
                    zero_balance.push(kind);
                }
            }
        }

        let report = VerificationReport {
            address: address.to_string(),
            chain,
            total_assets: holdings.len(),
            qualifying,
            zero_balance,
            required: self.config.min_slugs_required,
        };

        tracing::info!(
            total_assets = report.total_assets,
            found = report.qualifying.len(),
            passed = report.passed(),
            "wallet check complete"
        );

        Ok(report)
    }

    /// Run verification and report progress through `notifier`.
    ///
    /// Any failure leaves the caller with `AccessState::Denied`.
    pub async fn check_access(
        &self,
        address: &str,
        chain: ChainType,
        notifier: &dyn Notifier,
    ) -> AccessState {
        notifier.notify("Verifying wallet contents...");

        match self.inspect(address, chain).await {
            Ok(report) => match report.grant() {
                Some(grant) => {
                    notifier.notify("Slug verification successful!");
                    AccessState::Granted(grant)
                }
                None => {
                    let reason = if self.config.min_slugs_required <= 1 {
                        "No Slugs found in wallet. You need to own a Slug to play.".to_string()
                    } else {
                        format!(
                            "Found {} Slugs in wallet but need at least {} to play.",
                            report.qualifying.len(),
                            self.config.min_slugs_required
                        )
                    };
                    notifier.notify(&reason);
                    AccessState::Denied { reason }
                }
            },
            Err(e) => {
                let reason = format!("Error verifying wallet: {e}");
                notifier.notify(&reason);
                AccessState::Denied { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Holding, InMemoryAccountReader};
    use crate::core::RecordingNotifier;
    use crate::error::ProviderError;

    fn slug(kind: CreatureKind, amount: u64) -> Holding {
        Holding::new(kind.asset_id(), amount)
    }

    #[tokio::test]
    async fn test_zero_amount_does_not_qualify() {
        let reader = InMemoryAccountReader::new().with_account(
            "ADDR",
            ChainType::MainNet,
            [slug(CreatureKind::Zipacute, 0), Holding::new(31_566_704, 500)],
        );
        let verifier = OwnershipVerifier::new(reader);

        let report = verifier.inspect("ADDR", ChainType::MainNet).await.unwrap();
        assert_eq!(report.total_assets(), 2);
        assert!(report.qualifying().is_empty());
        assert_eq!(report.zero_balance(), &[CreatureKind::Zipacute]);
        assert!(!report.passed());
        assert!(report.grant().is_none());
    }

    #[tokio::test]
    async fn test_report_ownership() {
        let reader = InMemoryAccountReader::new().with_account(
            "ADDR",
            ChainType::TestNet,
            [slug(CreatureKind::Hailstorm, 1), slug(CreatureKind::Slugger, 3)],
        );
        let verifier = OwnershipVerifier::new(reader);

        let report = verifier.inspect("ADDR", ChainType::TestNet).await.unwrap();
        assert!(report.passed());
        assert_eq!(report.chain(), ChainType::TestNet);

        let grant = report.grant().unwrap();
        assert_eq!(grant.address(), "ADDR");
        assert!(grant.ownership().is_owned(CreatureKind::Hailstorm));
        assert!(!grant.ownership().is_owned(CreatureKind::Daggerpult));
    }

    #[tokio::test]
    async fn test_threshold_is_configurable() {
        let reader = InMemoryAccountReader::new().with_account(
            "ADDR",
            ChainType::MainNet,
            [slug(CreatureKind::Hailstorm, 1), slug(CreatureKind::Slugger, 1)],
        );
        let verifier = OwnershipVerifier::new(reader)
            .with_config(VerifierConfig::new().with_min_slugs_required(3));

        assert_eq!(verifier.verify("ADDR", ChainType::MainNet).await, Ok(false));
    }

    #[tokio::test]
    async fn test_whitespace_address_is_invalid() {
        let verifier = OwnershipVerifier::new(InMemoryAccountReader::new());
        assert_eq!(
            verifier.verify("   ", ChainType::MainNet).await,
            Err(VerificationError::InvalidAddress)
        );
        assert_eq!(verifier.reader().reads(), 0);
    }

    #[tokio::test]
    async fn test_check_access_notices() {
        let mut reader = InMemoryAccountReader::new().with_account(
            "ADDR",
            ChainType::MainNet,
            [slug(CreatureKind::Daggerpult, 1)],
        );
        reader.fail_with(ProviderError::Decode("bad json".into()));
        let verifier = OwnershipVerifier::new(reader);
        let notices = RecordingNotifier::new();

        let state = verifier.check_access("ADDR", ChainType::MainNet, &notices).await;
        assert!(!state.is_granted());
        assert_eq!(
            notices.messages(),
            vec![
                "Verifying wallet contents...",
                "Error verifying wallet: could not decode account information: bad json",
            ]
        );
    }
}
