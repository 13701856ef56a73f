//! Creature and attack definitions.
//!
//! `Creature` carries both static data (name, attacks, max health) and the
//! current health. The catalog holds pristine copies; a battle session
//! clones them into its roster so health changes stay session-local.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::assets::{CreatureKind, ImageAsset};

/// Unique identifier for a catalog creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Create a new creature ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Creature({})", self.0)
    }
}

/// A named attack with damage and cooldown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Unique within the owning creature.
    pub name: String,
    pub damage: u32,
    pub description: String,
    /// Turns before the attack may be reused.
    pub cooldown: u32,
}

impl Attack {
    /// Create a new attack.
    pub fn new(name: impl Into<String>, damage: u32, cooldown: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            description: String::new(),
            cooldown,
        }
    }

    /// Set the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Slug creature: identity, health and attacks.
///
/// ## Example
///
/// ```
/// use slug_battle::cards::{Attack, Creature, CreatureId, CreatureKind};
///
/// let slug = Creature::new(CreatureId::new(1), CreatureKind::Slugger, 150)
///     .with_attack(Attack::new("Quick Jab", 20, 0));
///
/// assert_eq!(slug.name, "Slugger");
/// assert_eq!(slug.health_percentage(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub kind: CreatureKind,
    pub name: String,
    pub image: ImageAsset,
    pub health: u32,
    pub max_health: u32,
    pub attacks: SmallVec<[Attack; 3]>,
}

impl Creature {
    /// Create a creature at full health with no attacks.
    pub fn new(id: CreatureId, kind: CreatureKind, max_health: u32) -> Self {
        Self {
            id,
            kind,
            name: kind.name().to_string(),
            image: kind.image(),
            health: max_health,
            max_health,
            attacks: SmallVec::new(),
        }
    }

    /// Add an attack (builder pattern).
    ///
    /// Panics if the creature already has an attack with the same name.
    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        assert!(
            self.attack(&attack.name).is_none(),
            "Attack {:?} already defined for {}",
            attack.name,
            self.name
        );
        self.attacks.push(attack);
        self
    }

    /// Look up an attack by name.
    #[must_use]
    pub fn attack(&self, name: &str) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.name == name)
    }

    /// Health as a percentage of maximum, for health bars.
    #[must_use]
    pub fn health_percentage(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.health) / f64::from(self.max_health)
    }

    /// Check if health has been depleted.
    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// Remove health, flooring at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }
}
