//! Triggered abilities waiting to be put on the stack.

use std::collections::VecDeque;

use crate::triggers::TriggeredAbility;

/// FIFO of triggered abilities.
///
/// Abilities triggered by one event are added as a batch sorted by
/// `TriggeredAbility::order_key`; batches keep event order. The same game
/// therefore always queues the same abilities in the same order.
#[derive(Clone, Debug, Default)]
pub struct TriggerQueue {
    pending: VecDeque<TriggeredAbility>,
}

impl TriggerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the abilities triggered by one event.
    pub fn enqueue(&mut self, mut batch: Vec<TriggeredAbility>) {
        batch.sort_by_key(TriggeredAbility::order_key);
        self.pending.extend(batch);
    }

    /// Next ability to put on the stack.
    pub fn pop_front(&mut self) -> Option<TriggeredAbility> {
        self.pending.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggeredAbility> {
        self.pending.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
