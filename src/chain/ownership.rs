//! Slug allow-list and per-wallet ownership record.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CreatureKind;

/// Asset ids that count as slugs, one per catalog creature.
#[derive(Clone, Debug)]
pub struct AllowList {
    assets: FxHashMap<u64, CreatureKind>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::standard()
    }
}

impl AllowList {
    /// The four slug NFTs.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_pairs(CreatureKind::ALL.map(|k| (k.asset_id(), k)))
    }

    /// Build from explicit `(asset id, kind)` pairs.
    ///
    /// Panics if two pairs share an asset id.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, CreatureKind)>) -> Self {
        let mut assets = FxHashMap::default();
        for (asset_id, kind) in pairs {
            if assets.insert(asset_id, kind).is_some() {
                panic!("Asset {asset_id} listed twice");
            }
        }
        Self { assets }
    }

    /// The slug an asset id stands for, if any.
    #[must_use]
    pub fn kind_of(&self, asset_id: u64) -> Option<CreatureKind> {
        self.assets.get(&asset_id).copied()
    }

    /// Number of listed assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if no assets are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Which slugs a wallet owns.
///
/// Derived from a verification report; recomputed whenever the wallet
/// address or chain changes. Every kind has an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    owned: FxHashMap<CreatureKind, bool>,
}

impl Default for OwnershipRecord {
    fn default() -> Self {
        Self::none()
    }
}

impl OwnershipRecord {
    /// Nothing owned.
    #[must_use]
    pub fn none() -> Self {
        Self::from_kinds(std::iter::empty())
    }

    /// Exactly the given kinds owned.
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = CreatureKind>) -> Self {
        let mut owned: FxHashMap<_, _> = CreatureKind::ALL.iter().map(|&k| (k, false)).collect();
        for kind in kinds {
            owned.insert(kind, true);
        }
        Self { owned }
    }

    /// Check if a kind is owned.
    #[must_use]
    pub fn is_owned(&self, kind: CreatureKind) -> bool {
        self.owned.get(&kind).copied().unwrap_or(false)
    }

    /// Check ownership by creature name.
    #[must_use]
    pub fn is_owned_name(&self, name: &str) -> bool {
        CreatureKind::ALL
            .iter()
            .any(|k| k.name() == name && self.is_owned(*k))
    }

    /// Owned kinds in catalog order.
    pub fn owned(&self) -> impl Iterator<Item = CreatureKind> + '_ {
        CreatureKind::ALL.into_iter().filter(|k| self.is_owned(*k))
    }

    /// Number of owned kinds.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owned.values().filter(|&&o| o).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_allow_list() {
        let list = AllowList::standard();
        assert_eq!(list.len(), 4);
        assert_eq!(list.kind_of(527_479_654), Some(CreatureKind::Daggerpult));
        assert_eq!(list.kind_of(42), None);
    }

    #[test]
    #[should_panic(expected = "listed twice")]
    fn test_duplicate_asset_panics() {
        let _ = AllowList::from_pairs([(1, CreatureKind::Slugger), (1, CreatureKind::Zipacute)]);
    }

    #[test]
    fn test_ownership_record() {
        let record = OwnershipRecord::from_kinds([CreatureKind::Hailstorm, CreatureKind::Slugger]);

        assert!(record.is_owned(CreatureKind::Slugger));
        assert!(!record.is_owned(CreatureKind::Zipacute));
        assert!(record.is_owned_name("Hailstorm"));
        assert!(!record.is_owned_name("Daggerpult"));
        assert!(!record.is_owned_name("Nobody"));
        assert_eq!(record.owned_count(), 2);

        let owned: Vec<_> = record.owned().collect();
        assert_eq!(owned, vec![CreatureKind::Slugger, CreatureKind::Hailstorm]);
    }

    #[test]
    fn test_none_owned() {
        let record = OwnershipRecord::default();
        assert_eq!(record.owned_count(), 0);
        assert_eq!(record.owned().count(), 0);
    }
}
