//! Battle session: roster selection, attacks, cooldowns and simulated
//! outcomes.
//!
//! ## Key Types
//!
//! - `BattleSession`: The Selecting -> Playing state machine
//! - `ResolutionPipeline`: Two-stage delay between an attack and the end
//!   of its cycle
//! - `BattleResult` / `OutcomeEffect`: What was drawn and what it does
//! - `BattleView`: Cheap snapshot for rendering

pub mod outcome;
pub mod pipeline;
pub mod session;
pub mod view;

pub use outcome::{BattleResult, OutcomeEffect};
pub use pipeline::{Fired, PendingAttack, ResolutionPipeline, Stage};
pub use session::{BattleSession, CooldownKey, Phase, SelectionChange};
pub use view::BattleView;
