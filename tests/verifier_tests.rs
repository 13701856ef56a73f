//! Ownership verifier integration tests.
//!
//! These tests verify the wallet gate:
//! - Pass/fail against the slug allow-list
//! - Input validation before any provider read
//! - Provider failures kept distinct from "no slugs"
//! - Notices emitted by the access check

use proptest::prelude::*;

use slug_battle::cards::CreatureKind;
use slug_battle::chain::{
    AccessState, AllowList, ChainType, Holding, InMemoryAccountReader, OwnershipVerifier,
};
use slug_battle::core::{RecordingNotifier, VerifierConfig};
use slug_battle::error::{ProviderError, VerificationError};

const ADDR: &str = "SLUGHOLDER7Q2XK4ZWNMBVCE3HRJ5TYPLAUIOFDGS6QWERTYUIOPASDFGH";

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn slug(kind: CreatureKind, amount: u64) -> Holding {
    Holding::new(kind.asset_id(), amount)
}

// =============================================================================
// Pass / fail
// =============================================================================

/// A single slug with a positive amount passes the default threshold.
#[tokio::test]
async fn test_one_slug_passes() {
    let reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::MainNet,
        [Holding::new(31_566_704, 10), slug(CreatureKind::Slugger, 1)],
    );
    let verifier = OwnershipVerifier::new(reader);

    assert_eq!(verifier.verify(ADDR, ChainType::MainNet).await, Ok(true));
    assert_eq!(verifier.reader().reads(), 1);
}

/// Holdings on the other chain do not count.
#[tokio::test]
async fn test_chain_is_respected() {
    let reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::TestNet,
        [slug(CreatureKind::Hailstorm, 1)],
    );
    let verifier = OwnershipVerifier::new(reader);

    assert_eq!(verifier.verify(ADDR, ChainType::MainNet).await, Ok(false));
    assert_eq!(verifier.verify(ADDR, ChainType::TestNet).await, Ok(true));
}

/// An empty wallet is a clean `false`, not an error.
#[tokio::test]
async fn test_empty_wallet_is_false() {
    let verifier = OwnershipVerifier::new(InMemoryAccountReader::new());
    assert_eq!(verifier.verify(ADDR, ChainType::MainNet).await, Ok(false));
}

/// A custom allow-list replaces the standard one.
#[tokio::test]
async fn test_custom_allow_list() {
    let reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::TestNet,
        [Holding::new(1001, 1)],
    );
    let verifier = OwnershipVerifier::new(reader)
        .with_allow_list(AllowList::from_pairs([(1001, CreatureKind::Zipacute)]));

    let report = verifier.inspect(ADDR, ChainType::TestNet).await.unwrap();
    assert_eq!(report.qualifying(), &[CreatureKind::Zipacute]);
    assert!(report.ownership().is_owned(CreatureKind::Zipacute));
}

/// The stricter three-slug threshold is opt-in.
#[tokio::test]
async fn test_three_slug_threshold() {
    let reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::MainNet,
        [
            slug(CreatureKind::Slugger, 1),
            slug(CreatureKind::Daggerpult, 1),
            slug(CreatureKind::Zipacute, 0),
        ],
    );
    let verifier = OwnershipVerifier::new(reader)
        .with_config(VerifierConfig::new().with_min_slugs_required(3));
    let notices = RecordingNotifier::new();

    let state = verifier.check_access(ADDR, ChainType::MainNet, &notices).await;
    assert_eq!(
        state,
        AccessState::Denied {
            reason: "Found 2 Slugs in wallet but need at least 3 to play.".into()
        }
    );
}

// =============================================================================
// Failures
// =============================================================================

/// Empty addresses fail with `InvalidAddress` and never reach the provider.
#[tokio::test]
async fn test_empty_address_makes_no_read() {
    let verifier = OwnershipVerifier::new(InMemoryAccountReader::new());

    assert_eq!(
        verifier.verify("", ChainType::MainNet).await,
        Err(VerificationError::InvalidAddress)
    );
    assert_eq!(
        verifier.inspect("", ChainType::TestNet).await.unwrap_err(),
        VerificationError::InvalidAddress
    );
    assert_eq!(verifier.reader().reads(), 0);
}

/// Provider failures surface as `ProviderFailure` with the cause.
#[tokio::test]
async fn test_provider_failure_propagates() {
    let mut reader = InMemoryAccountReader::new();
    reader.fail_with(ProviderError::Transport("connection reset".into()));
    let verifier = OwnershipVerifier::new(reader);

    let err = verifier.verify(ADDR, ChainType::MainNet).await.unwrap_err();
    assert_eq!(
        err,
        VerificationError::ProviderFailure(ProviderError::Transport("connection reset".into()))
    );
}

/// Retrying after a provider failure works once the provider recovers.
#[tokio::test]
async fn test_retry_after_failure() {
    let mut reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::MainNet,
        [slug(CreatureKind::Daggerpult, 1)],
    );
    reader.fail_with(ProviderError::Transport("timeout".into()));
    let mut verifier = OwnershipVerifier::new(reader);
    assert!(verifier.verify(ADDR, ChainType::MainNet).await.is_err());

    verifier.reader_mut().clear_failure();
    assert_eq!(verifier.verify(ADDR, ChainType::MainNet).await, Ok(true));
    assert_eq!(verifier.reader().reads(), 2);
}

// =============================================================================
// Access check
// =============================================================================

/// A passing check notifies success and hands out a grant.
#[tokio::test]
async fn test_access_granted_notices() {
    let reader = InMemoryAccountReader::new().with_account(
        ADDR,
        ChainType::MainNet,
        [slug(CreatureKind::Slugger, 1), slug(CreatureKind::Hailstorm, 2)],
    );
    let verifier = OwnershipVerifier::new(reader);
    let notices = RecordingNotifier::new();

    let state = verifier.check_access(ADDR, ChainType::MainNet, &notices).await;

    assert_eq!(
        notices.messages(),
        vec!["Verifying wallet contents...", "Slug verification successful!"]
    );
    let grant = state.into_grant().expect("access should be granted");
    assert_eq!(grant.address(), ADDR);
    assert_eq!(grant.chain(), ChainType::MainNet);
    assert_eq!(grant.ownership().owned_count(), 2);
}

/// A wallet with no slugs is denied with the standard message.
#[tokio::test]
async fn test_access_denied_without_slugs() {
    let verifier = OwnershipVerifier::new(InMemoryAccountReader::new());
    let notices = RecordingNotifier::new();

    let state = verifier.check_access(ADDR, ChainType::MainNet, &notices).await;

    let expected = "No Slugs found in wallet. You need to own a Slug to play.";
    assert_eq!(state, AccessState::Denied { reason: expected.into() });
    assert_eq!(notices.last().as_deref(), Some(expected));
}

/// An empty address is denied with the corrective error text.
#[tokio::test]
async fn test_access_denied_for_empty_address() {
    let verifier = OwnershipVerifier::new(InMemoryAccountReader::new());
    let notices = RecordingNotifier::new();

    let state = verifier.check_access("", ChainType::MainNet, &notices).await;

    assert!(!state.is_granted());
    assert_eq!(
        notices.last().as_deref(),
        Some("Error verifying wallet: account address is empty")
    );
    assert_eq!(verifier.reader().reads(), 0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Wallets holding only non-slug assets, or slugs with zero amount,
    /// never pass.
    #[test]
    fn prop_no_qualifying_holdings_is_false(
        others in prop::collection::vec((1u64..300_000_000, 0u64..1000), 0..20),
        zero_slugs in prop::collection::vec(0usize..4, 0..4),
    ) {
        let mut holdings: Vec<Holding> =
            others.into_iter().map(|(id, amount)| Holding::new(id, amount)).collect();
        holdings.extend(zero_slugs.into_iter().map(|i| slug(CreatureKind::ALL[i], 0)));

        let reader = InMemoryAccountReader::new().with_account(ADDR, ChainType::MainNet, holdings);
        let verifier = OwnershipVerifier::new(reader);

        prop_assert_eq!(block_on(verifier.verify(ADDR, ChainType::MainNet)), Ok(false));
    }

    /// Verifying twice with unchanged holdings gives the same answer.
    #[test]
    fn prop_verify_is_idempotent(
        amounts in prop::collection::vec(0u64..3, 4),
        threshold in 0usize..5,
    ) {
        let holdings: Vec<Holding> = CreatureKind::ALL
            .iter()
            .zip(&amounts)
            .map(|(k, a)| slug(*k, *a))
            .collect();
        let reader = InMemoryAccountReader::new().with_account(ADDR, ChainType::MainNet, holdings);
        let verifier = OwnershipVerifier::new(reader)
            .with_config(VerifierConfig::new().with_min_slugs_required(threshold));

        let first = block_on(verifier.verify(ADDR, ChainType::MainNet));
        let second = block_on(verifier.verify(ADDR, ChainType::MainNet));

        let qualifying = amounts.iter().filter(|&&a| a > 0).count();
        prop_assert_eq!(first.clone(), second);
        prop_assert_eq!(first, Ok(qualifying >= threshold));
    }
}
