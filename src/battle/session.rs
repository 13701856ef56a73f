//! Battle session state machine.
//!
//! ## Phases
//!
//! - **Selecting**: the player toggles owned creatures into a roster of
//!   exactly `roster_size` entries, then starts the battle.
//! - **Playing**: the first roster creature is active, the rest are on
//!   the bench. Invoking an attack commits the session to one resolution
//!   cycle (see `pipeline`); while it runs, no other attack or swap is
//!   accepted.
//!
//! There is no terminal state. The session lives until its owner drops
//! it, and dropping it drops any pending stage with it.
//!
//! Every rejection is reported through the notifier and leaves the
//! session unchanged.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::outcome::{BattleResult, OutcomeEffect};
use super::pipeline::{deadline_after, Fired, PendingAttack, ResolutionPipeline};
use super::view::BattleView;
use crate::cards::{Catalog, Creature, CreatureId};
use crate::chain::{AccessGrant, OwnershipRecord};
use crate::core::{BattleConfig, BattleRng, BattleRngState, Notifier, TracingNotifier};
use crate::error::{AttackRejected, SelectionRejected, SwapRejected};

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Selecting,
    Playing,
}

/// Cooldown table key: an attack of the creature in a roster slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CooldownKey {
    pub slot: usize,
    pub attack: String,
}

impl CooldownKey {
    /// Create a new key.
    pub fn new(slot: usize, attack: impl Into<String>) -> Self {
        Self {
            slot,
            attack: attack.into(),
        }
    }
}

/// What a successful toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// One player's battle session.
///
/// ## Example
///
/// ```
/// use slug_battle::battle::{BattleSession, Phase};
/// use slug_battle::cards::{CreatureId, CreatureKind};
/// use slug_battle::chain::{ChainType, Holding, InMemoryAccountReader, OwnershipVerifier};
/// use slug_battle::core::BattleConfig;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let holdings = CreatureKind::ALL.map(|k| Holding::new(k.asset_id(), 1));
/// let reader = InMemoryAccountReader::new().with_account("ADDR", ChainType::MainNet, holdings);
/// let report = OwnershipVerifier::new(reader).inspect("ADDR", ChainType::MainNet).await.unwrap();
///
/// let mut session = BattleSession::new(report.grant().unwrap(), BattleConfig::new().with_seed(1));
/// for id in [1, 2, 4] {
///     session.toggle(CreatureId::new(id)).unwrap();
/// }
/// session.start_battle().unwrap();
/// assert_eq!(session.phase(), Phase::Playing);
/// assert_eq!(session.active().map(|c| c.name.as_str()), Some("Slugger"));
/// # });
/// ```
pub struct BattleSession {
    config: BattleConfig,
    catalog: Catalog,
    ownership: OwnershipRecord,
    phase: Phase,
    selection: Vector<CreatureId>,
    roster: Vector<Creature>,
    active: usize,
    opponent: Creature,
    cooldowns: ImHashMap<CooldownKey, u32>,
    result: BattleResult,
    pipeline: ResolutionPipeline,
    rng: BattleRng,
    notifier: Box<dyn Notifier>,
}

impl BattleSession {
    /// Start selecting with the standard catalog.
    pub fn new(grant: AccessGrant, config: BattleConfig) -> Self {
        Self::with_catalog(grant, Catalog::standard(), config)
    }

    /// Start selecting with a custom catalog.
    ///
    /// The first catalog entry becomes the opponent. Panics on an empty
    /// catalog.
    pub fn with_catalog(grant: AccessGrant, catalog: Catalog, config: BattleConfig) -> Self {
        let opponent = catalog
            .first()
            .cloned()
            .expect("Catalog must contain at least 1 creature");
        let rng = config
            .seed
            .map(BattleRng::new)
            .unwrap_or_else(BattleRng::from_entropy);

        tracing::debug!(address = grant.address(), seed = rng.seed(), "battle session created");

        Self {
            config,
            catalog,
            ownership: grant.ownership().clone(),
            phase: Phase::Selecting,
            selection: Vector::new(),
            roster: Vector::new(),
            active: 0,
            opponent,
            cooldowns: ImHashMap::new(),
            result: BattleResult::None,
            pipeline: ResolutionPipeline::new(),
            rng,
            notifier: Box::new(TracingNotifier),
        }
    }

    /// Route notices to `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    // === Accessors ===

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ownership(&self) -> &OwnershipRecord {
        &self.ownership
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Creatures picked so far, in pick order.
    pub fn selection(&self) -> &Vector<CreatureId> {
        &self.selection
    }

    /// Battle roster. Empty while selecting.
    pub fn roster(&self) -> &Vector<Creature> {
        &self.roster
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The creature currently battling.
    #[must_use]
    pub fn active(&self) -> Option<&Creature> {
        self.roster.get(self.active)
    }

    /// Roster slots other than the active one.
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Creature)> {
        let active = self.active;
        self.roster.iter().enumerate().filter(move |(i, _)| *i != active)
    }

    pub fn opponent(&self) -> &Creature {
        &self.opponent
    }

    /// Remaining cooldown of an attack in a roster slot.
    #[must_use]
    pub fn cooldown(&self, slot: usize, attack: &str) -> Option<u32> {
        self.cooldowns.get(&CooldownKey::new(slot, attack)).copied()
    }

    #[must_use]
    pub fn battle_result(&self) -> BattleResult {
        self.result
    }

    /// Check if an attack is being resolved.
    #[must_use]
    pub fn is_battling(&self) -> bool {
        !self.pipeline.is_idle()
    }

    /// When the in-flight stage fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pipeline.next_deadline()
    }

    #[must_use]
    pub fn rng_state(&self) -> BattleRngState {
        self.rng.state()
    }

    /// Immutable snapshot for rendering. O(1) to take and to clone.
    #[must_use]
    pub fn view(&self) -> BattleView {
        BattleView {
            phase: self.phase,
            selection: self.selection.clone(),
            roster: self.roster.clone(),
            active_index: self.active,
            opponent: self.opponent.clone(),
            cooldowns: self.cooldowns.clone(),
            battle_result: self.result,
            is_battling: self.is_battling(),
        }
    }

    // === Selection ===

    /// Add a creature to the roster, or remove it if already picked.
    pub fn toggle(&mut self, id: CreatureId) -> Result<SelectionChange, SelectionRejected> {
        if self.phase != Phase::Selecting {
            return Err(self.reject(SelectionRejected::AlreadyPlaying));
        }
        let Some(creature) = self.catalog.get(id) else {
            return Err(self.reject(SelectionRejected::UnknownCreature(id)));
        };
        let name = creature.name.clone();
        let kind = creature.kind;

        if let Some(pos) = self.selection.index_of(&id) {
            self.selection.remove(pos);
            tracing::debug!(%id, "deselected {name}");
            return Ok(SelectionChange::Removed);
        }

        if !self.ownership.is_owned(kind) {
            return Err(self.reject(SelectionRejected::NotOwned { name }));
        }
        if self.selection.len() >= self.config.roster_size {
            return Err(self.reject(SelectionRejected::LimitReached {
                limit: self.config.roster_size,
            }));
        }

        self.selection.push_back(id);
        tracing::debug!(%id, picked = self.selection.len(), "selected {name}");
        Ok(SelectionChange::Added)
    }

    /// Leave selection and start playing with the picked roster.
    pub fn start_battle(&mut self) -> Result<(), SelectionRejected> {
        if self.phase != Phase::Selecting {
            return Err(self.reject(SelectionRejected::AlreadyPlaying));
        }
        let missing = self.config.roster_size.saturating_sub(self.selection.len());
        if missing > 0 {
            return Err(self.reject(SelectionRejected::NeedMore { missing }));
        }

        let roster: Vector<Creature> = self
            .selection
            .iter()
            .filter_map(|id| self.catalog.get(*id).cloned())
            .collect();

        let mut cooldowns = ImHashMap::new();
        for (slot, creature) in roster.iter().enumerate() {
            for attack in &creature.attacks {
                cooldowns.insert(CooldownKey::new(slot, attack.name.as_str()), 0);
            }
        }

        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        let notice = format!("Battle started with {}!", names.join(", "));

        self.roster = roster;
        self.cooldowns = cooldowns;
        self.active = 0;
        self.result = BattleResult::None;
        self.phase = Phase::Playing;

        tracing::debug!("entering play phase");
        self.notifier.notify(&notice);
        Ok(())
    }

    // === Playing ===

    /// Invoke an attack of the active creature now.
    pub fn attack(&mut self, name: &str) -> Result<(), AttackRejected> {
        self.attack_at(name, Instant::now())
    }

    /// Invoke an attack of the active creature at `now`.
    ///
    /// Sets the attack's cooldown to its static value and schedules the
    /// outcome `outcome_delay` after `now`.
    pub fn attack_at(&mut self, name: &str, now: Instant) -> Result<(), AttackRejected> {
        if self.phase != Phase::Playing {
            return Err(self.reject(AttackRejected::NotPlaying));
        }
        if self.is_battling() {
            return Err(self.reject(AttackRejected::BattleInProgress));
        }

        let slot = self.active;
        let Some(creature) = self.roster.get(slot) else {
            return Err(self.reject(AttackRejected::NotPlaying));
        };
        if !self.ownership.is_owned(creature.kind) {
            let name = creature.name.clone();
            return Err(self.reject(AttackRejected::NotOwned { name }));
        }
        if creature.is_fainted() {
            let name = creature.name.clone();
            return Err(self.reject(AttackRejected::Fainted { name }));
        }
        let Some(attack) = creature.attack(name) else {
            return Err(self.reject(AttackRejected::UnknownAttack(name.to_string())));
        };
        let (cooldown, damage) = (attack.cooldown, attack.damage);

        let key = CooldownKey::new(slot, name);
        let remaining = self.cooldowns.get(&key).copied().unwrap_or(0);
        if remaining > 0 {
            return Err(self.reject(AttackRejected::CooldownActive {
                attack: name.to_string(),
                remaining,
            }));
        }

        let pending = PendingAttack {
            slot,
            attack: name.to_string(),
            damage,
        };
        let deadline = deadline_after(now, self.config.outcome_delay);
        if !self.pipeline.schedule(pending, deadline) {
            return Err(self.reject(AttackRejected::BattleInProgress));
        }
        self.cooldowns.insert(key, cooldown);

        tracing::debug!(slot, cooldown, "attack {name} scheduled");
        self.notifier.notify(&format!("Used {name}!"));
        Ok(())
    }

    /// Make roster slot `index` the active creature.
    pub fn swap_active(&mut self, index: usize) -> Result<(), SwapRejected> {
        if self.phase != Phase::Playing {
            return Err(self.reject(SwapRejected::NotPlaying));
        }
        if self.is_battling() {
            return Err(self.reject(SwapRejected::BattleInProgress));
        }
        let len = self.roster.len();
        let Some(creature) = self.roster.get(index) else {
            return Err(self.reject(SwapRejected::OutOfBounds { index, len }));
        };
        if index == self.active {
            return Err(self.reject(SwapRejected::AlreadyActive(index)));
        }

        let notice = format!("Switched to {}!", creature.name);
        self.active = index;
        tracing::debug!(index, "active creature changed");
        self.notifier.notify(&notice);
        Ok(())
    }

    /// Fire every stage whose deadline is at or before `now`.
    ///
    /// Returns the outcome drawn during this call, if one was.
    pub fn poll(&mut self, now: Instant) -> Option<BattleResult> {
        let mut drawn = None;
        while let Some(fired) = self.pipeline.poll(now, self.config.reset_delay) {
            match fired {
                Fired::Outcome(attack) => drawn = Some(self.resolve_outcome(&attack)),
                Fired::Reset => self.finish_cycle(),
            }
        }
        drawn
    }

    /// Wait out the in-flight cycle on the tokio clock.
    ///
    /// Dropping the returned future cancels the wait; the pending stage
    /// stays in the pipeline until polled or cancelled.
    pub async fn settle(&mut self) {
        while let Some(deadline) = self.pipeline.next_deadline() {
            tokio::time::sleep_until(deadline).await;
            self.poll(Instant::now());
        }
    }

    /// Abandon the in-flight cycle without applying its remaining stages.
    ///
    /// A displayed outcome is cleared with it; cooldowns are left as they
    /// are. Returns `true` if something was cancelled.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(stage) = self.pipeline.cancel() else {
            return false;
        };
        self.result = BattleResult::None;
        tracing::debug!(?stage, "pending resolution cancelled");
        true
    }

    /// Apply a refreshed ownership record, e.g. after the wallet changed.
    ///
    /// Picks that are no longer owned are dropped from the selection. A
    /// roster creature that is no longer owned stays in place but cannot
    /// attack.
    pub fn update_ownership(&mut self, ownership: OwnershipRecord) {
        self.ownership = ownership;
        let catalog = &self.catalog;
        let owned = &self.ownership;
        let before = self.selection.len();
        self.selection
            .retain(|id| catalog.get(*id).is_some_and(|c| owned.is_owned(c.kind)));
        let dropped = before - self.selection.len();
        if dropped > 0 {
            tracing::debug!(dropped, "selection pruned after ownership change");
        }
    }

    fn resolve_outcome(&mut self, attack: &PendingAttack) -> BattleResult {
        let result = if self.rng.chance(self.config.win_probability) {
            BattleResult::Victory
        } else {
            BattleResult::Defeat
        };
        self.result = result;

        if self.config.outcome_effect == OutcomeEffect::ApplyDamage {
            match result {
                BattleResult::Victory => {
                    self.opponent.take_damage(attack.damage);
                }
                BattleResult::Defeat => {
                    if let Some(creature) = self.roster.get_mut(attack.slot) {
                        creature.take_damage(attack.damage);
                    }
                }
                BattleResult::None => {}
            }
        }

        tracing::debug!(?result, attack = %attack.attack, "outcome drawn");
        if let Some(message) = result.message() {
            self.notifier.notify(message);
        }
        result
    }

    fn finish_cycle(&mut self) {
        self.result = BattleResult::None;
        self.cooldowns = self
            .cooldowns
            .iter()
            .map(|(key, remaining)| (key.clone(), remaining.saturating_sub(1)))
            .collect();
        tracing::debug!("resolution cycle finished");
    }

    fn reject<E: std::fmt::Display>(&self, err: E) -> E {
        tracing::debug!("rejected: {err}");
        self.notifier.notify(&err.to_string());
        err
    }
}

impl std::fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSession")
            .field("phase", &self.phase)
            .field("selection", &self.selection)
            .field("active", &self.active)
            .field("result", &self.result)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
