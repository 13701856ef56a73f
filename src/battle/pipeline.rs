//! Two-stage resolution delay.
//!
//! An attack moves the pipeline from idle to `PendingOutcome`. When that
//! deadline passes the outcome is drawn and the pipeline waits in
//! `PendingReset`; when the second deadline passes it returns to idle.
//! Stages only fire in that order. The reset deadline is measured from
//! the outcome deadline, not from when the outcome was polled, so a late
//! poll fires both stages back to back without drifting.
//!
//! Nothing here owns a timer. The holder polls with the current time or
//! awaits `next_deadline`, and `cancel` drops whatever is in flight.

use tokio::time::{Duration, Instant};

/// Upper bound on how far ahead a stage can be scheduled.
pub const MAX_STAGE_DELAY: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `at + delay`, capped at `MAX_STAGE_DELAY` past `at`.
#[must_use]
pub fn deadline_after(at: Instant, delay: Duration) -> Instant {
    at.checked_add(delay.min(MAX_STAGE_DELAY))
        .unwrap_or(at)
}

/// The attack awaiting an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAttack {
    /// Roster slot of the attacker.
    pub slot: usize,
    pub attack: String,
    pub damage: u32,
}

/// In-flight stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    PendingOutcome {
        deadline: Instant,
        attack: PendingAttack,
    },
    PendingReset {
        deadline: Instant,
    },
}

impl Stage {
    /// When this stage fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        match self {
            Stage::PendingOutcome { deadline, .. } | Stage::PendingReset { deadline } => *deadline,
        }
    }
}

/// A stage that fired during `poll`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fired {
    /// Draw and show the outcome of this attack.
    Outcome(PendingAttack),
    /// Clear the outcome and end the cycle.
    Reset,
}

/// Cancellable two-stage delay.
#[derive(Clone, Debug, Default)]
pub struct ResolutionPipeline {
    stage: Option<Stage>,
}

impl ResolutionPipeline {
    /// Create an idle pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stage.is_none()
    }

    /// The in-flight stage.
    #[must_use]
    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    /// Deadline of the in-flight stage.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stage.as_ref().map(Stage::deadline)
    }

    /// Start a cycle. Returns `false` (and changes nothing) if one is
    /// already in flight.
    pub fn schedule(&mut self, attack: PendingAttack, deadline: Instant) -> bool {
        if self.stage.is_some() {
            return false;
        }
        self.stage = Some(Stage::PendingOutcome { deadline, attack });
        true
    }

    /// Advance by at most one stage if its deadline has passed.
    ///
    /// Call repeatedly until `None` to catch up on a late poll.
    pub fn poll(&mut self, now: Instant, reset_delay: Duration) -> Option<Fired> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }

        match self.stage.take()? {
            Stage::PendingOutcome { deadline, attack } => {
                self.stage = Some(Stage::PendingReset {
                    deadline: deadline_after(deadline, reset_delay),
                });
                Some(Fired::Outcome(attack))
            }
            Stage::PendingReset { .. } => Some(Fired::Reset),
        }
    }

    /// Drop the in-flight stage without firing it.
    pub fn cancel(&mut self) -> Option<Stage> {
        self.stage.take()
    }
}
