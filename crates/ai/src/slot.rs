//! One in-flight assist request per UI slot.
//!
//! A slot hands out a ticket when a request starts. Starting another
//! request, or moving the slot to a new context (the next question),
//! invalidates older tickets, so a late reply is dropped instead of being
//! shown next to the wrong word.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Proof that a request was started in a given generation of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A UI slot that accepts at most one current request.
#[derive(Debug, Clone, Default)]
pub struct AssistSlot {
    generation: Arc<AtomicU64>,
}

impl AssistSlot {
    /// Create a slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; earlier tickets stop being current.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every outstanding ticket without starting a request.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether a reply for `ticket` may still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply `value` only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let slot = AssistSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        assert_eq!(slot.accept(first, "late"), None);
        assert_eq!(slot.accept(second, "fresh"), Some("fresh"));
    }

    #[test]
    fn test_context_change_drops_reply() {
        let slot = AssistSlot::new();
        let ticket = slot.begin();
        slot.invalidate();
        assert!(!slot.is_current(ticket));
    }

    #[tokio::test]
    async fn test_stale_reply_from_task_is_dropped() {
        let slot = AssistSlot::new();
        let ticket = slot.begin();
        let (tx, rx) = tokio::sync::oneshot::channel();

        let worker = {
            let slot = slot.clone();
            tokio::spawn(async move {
                rx.await.ok();
                slot.accept(ticket, "hint for old word")
            })
        };

        // Learner moves on before the reply lands.
        slot.invalidate();
        tx.send(()).unwrap();
        assert_eq!(worker.await.unwrap(), None);
    }
}
