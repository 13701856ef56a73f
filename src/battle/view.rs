//! Read-only session snapshot for renderers.

use im::{HashMap as ImHashMap, Vector};

use super::outcome::BattleResult;
use super::session::{CooldownKey, Phase};
use crate::cards::{Creature, CreatureId};

/// Snapshot of a `BattleSession`.
///
/// Backed by persistent collections, so taking and cloning it is O(1)
/// and later session changes never show through.
#[derive(Clone, Debug)]
pub struct BattleView {
    pub phase: Phase,
    pub selection: Vector<CreatureId>,
    pub roster: Vector<Creature>,
    pub active_index: usize,
    pub opponent: Creature,
    pub cooldowns: ImHashMap<CooldownKey, u32>,
    pub battle_result: BattleResult,
    pub is_battling: bool,
}

impl BattleView {
    /// The active creature.
    #[must_use]
    pub fn active(&self) -> Option<&Creature> {
        self.roster.get(self.active_index)
    }

    /// Remaining cooldown of an attack in a roster slot.
    #[must_use]
    pub fn cooldown(&self, slot: usize, attack: &str) -> Option<u32> {
        self.cooldowns.get(&CooldownKey::new(slot, attack)).copied()
    }

    /// Check if an attack button should be enabled.
    #[must_use]
    pub fn can_attack(&self, attack: &str) -> bool {
        self.phase == Phase::Playing
            && !self.is_battling
            && self.active().is_some_and(|c| !c.is_fainted() && c.attack(attack).is_some())
            && self.cooldown(self.active_index, attack) == Some(0)
    }
}
