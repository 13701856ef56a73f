//! Battle outcomes and what they do to health.

use serde::{Deserialize, Serialize};

/// Result shown after an attack resolves. Cleared at the end of the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    #[default]
    None,
    Victory,
    Defeat,
}

impl BattleResult {
    /// Notice text for a drawn result.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            BattleResult::None => None,
            BattleResult::Victory => Some("Victory!"),
            BattleResult::Defeat => Some("Defeat!"),
        }
    }
}

/// Consequence of a drawn outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeEffect {
    /// Outcomes are shown but change nothing; the sandbox never ends.
    #[default]
    Cosmetic,
    /// Victory deals the attack's damage to the opponent; defeat deals
    /// it to the attacking creature. Health floors at zero.
    ApplyDamage,
}
