//! Fixed creature catalog.
//!
//! The `Catalog` stores the immutable reference copies of every creature.
//! It provides lookup by `CreatureId`, by `CreatureKind`, and iteration in
//! registration order.

use rustc_hash::FxHashMap;

use super::assets::CreatureKind;
use super::definition::{Attack, Creature, CreatureId};

/// Registry of creature definitions.
///
/// ## Example
///
/// ```
/// use slug_battle::cards::{Catalog, CreatureKind};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 4);
///
/// let zip = catalog.by_kind(CreatureKind::Zipacute).unwrap();
/// assert_eq!(zip.max_health, 100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    creatures: FxHashMap<CreatureId, Creature>,
    order: Vec<CreatureId>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four slugs with their attacks.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register(
            Creature::new(CreatureId::new(1), CreatureKind::Slugger, 150)
                .with_attack(
                    Attack::new("Power Punch", 40, 1)
                        .with_description("A devastating close-range attack"),
                )
                .with_attack(
                    Attack::new("Ground Slam", 60, 3)
                        .with_description("Slams the ground causing area damage"),
                )
                .with_attack(
                    Attack::new("Quick Jab", 20, 0)
                        .with_description("A fast attack that can be used frequently"),
                ),
        );

        catalog.register(
            Creature::new(CreatureId::new(2), CreatureKind::Daggerpult, 120)
                .with_attack(
                    Attack::new("Blade Storm", 45, 2)
                        .with_description("Launches multiple sharp projectiles"),
                )
                .with_attack(
                    Attack::new("Precision Strike", 70, 3)
                        .with_description("A highly accurate single target attack"),
                )
                .with_attack(
                    Attack::new("Throwing Knives", 25, 1).with_description("Quick ranged attack"),
                ),
        );

        catalog.register(
            Creature::new(CreatureId::new(3), CreatureKind::Zipacute, 100)
                .with_attack(
                    Attack::new("Lightning Strike", 80, 4)
                        .with_description("Powerful electric attack"),
                )
                .with_attack(Attack::new("Static Shock", 30, 1).with_description("Quick electric jolt"))
                .with_attack(
                    Attack::new("Thunder Wave", 50, 2)
                        .with_description("Area of effect electric damage"),
                ),
        );

        catalog.register(
            Creature::new(CreatureId::new(4), CreatureKind::Hailstorm, 130)
                .with_attack(Attack::new("Ice Blast", 55, 2).with_description("Freezing projectile attack"))
                .with_attack(Attack::new("Blizzard", 75, 4).with_description("Massive area frost damage"))
                .with_attack(Attack::new("Frost Bite", 35, 1).with_description("Quick frost attack")),
        );

        catalog
    }

    /// Register a creature.
    ///
    /// Panics if the ID or name is already taken.
    pub fn register(&mut self, creature: Creature) {
        if self.creatures.contains_key(&creature.id) {
            panic!("Creature with ID {:?} already registered", creature.id);
        }
        if self.by_name(&creature.name).is_some() {
            panic!("Creature named {:?} already registered", creature.name);
        }
        self.order.push(creature.id);
        self.creatures.insert(creature.id, creature);
    }

    /// Get a creature by ID.
    #[must_use]
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    /// Get a creature by kind.
    #[must_use]
    pub fn by_kind(&self, kind: CreatureKind) -> Option<&Creature> {
        self.iter().find(|c| c.kind == kind)
    }

    /// Get a creature by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Creature> {
        self.creatures.values().find(|c| c.name == name)
    }

    /// The first registered creature.
    #[must_use]
    pub fn first(&self) -> Option<&Creature> {
        self.order.first().and_then(|id| self.creatures.get(id))
    }

    /// Check if a creature ID is registered.
    #[must_use]
    pub fn contains(&self, id: CreatureId) -> bool {
        self.creatures.contains_key(&id)
    }

    /// Get the number of registered creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.order.iter().filter_map(|id| self.creatures.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 4);

        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Slugger", "Daggerpult", "Zipacute", "Hailstorm"]);

        for creature in catalog.iter() {
            assert_eq!(creature.attacks.len(), 3);
            assert_eq!(creature.health, creature.max_health);
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.get(CreatureId::new(4)).map(|c| c.kind), Some(CreatureKind::Hailstorm));
        assert!(catalog.get(CreatureId::new(99)).is_none());
        assert!(catalog.contains(CreatureId::new(1)));
        assert_eq!(catalog.by_name("Slugger").map(|c| c.id), Some(CreatureId::new(1)));
        assert_eq!(catalog.first().map(|c| c.kind), Some(CreatureKind::Slugger));

        let jab = catalog
            .by_kind(CreatureKind::Slugger)
            .and_then(|c| c.attack("Quick Jab"))
            .map(|a| a.cooldown);
        assert_eq!(jab, Some(0));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = Catalog::standard();
        catalog.register(Creature::new(CreatureId::new(1), CreatureKind::Zipacute, 10));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = Catalog::standard();
        catalog.register(Creature::new(CreatureId::new(9), CreatureKind::Zipacute, 10));
    }
}
