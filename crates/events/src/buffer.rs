//! Pending-event buffer carried by an aggregate between load and save.

/// Buffer of not-yet-dispatched domain events.
///
/// The aggregate records events here; it never dispatches them. The
/// persistence/dispatch collaborator drains the buffer after a successful
/// commit ("publish after commit"): events recorded during a rolled-back
/// transaction are simply never drained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBuffer<E> {
    pending: Vec<E>,
}

impl<E> EventBuffer<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Append one event. Called once per business-meaningful mutation.
    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Read-only view of the pending events, in emission order.
    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return all pending events (dispatch path).
    pub fn take(&mut self) -> Vec<E> {
        core::mem::take(&mut self.pending)
    }

    /// Drop all pending events. Idempotent.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
