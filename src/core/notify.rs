//! User-visible notification sink.
//!
//! Both the verifier and the battle session report progress through a
//! `Notifier`. Delivery is fire-and-forget: no acknowledgement, and the
//! only ordering is call order.

use std::cell::RefCell;
use std::rc::Rc;

/// Fire-and-forget sink for status lines shown to the player.
pub trait Notifier {
    /// Deliver one message.
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Forwards notices to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "slug_battle::notice", "{message}");
    }
}

/// Discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}

/// Keeps every notice in memory.
///
/// Clones share the same buffer, so a clone can be handed to a session
/// while the original is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, in call order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// The most recent message.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Number of messages received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Check if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Drop all recorded messages.
    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
