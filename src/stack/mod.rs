//! Stack and trigger queue.
//!
//! Triggered abilities go through two holding areas before they resolve:
//!
//! 1. **`TriggerQueue`**: abilities that triggered but have not been put on
//!    the stack yet. Filled by `Game::process_events`, in stable order.
//! 2. **`PriorityStack`**: abilities on the stack with targets chosen.
//!    Players pass priority in turn order; when all pass, the top resolves.
//!
//! Resolution itself needs the whole `Game` (effects get `&mut Game`), so
//! it lives in `rules::Game::resolve_top`; this module only keeps order.

mod priority;
mod queue;

pub use priority::{PriorityStack, StackEntry, StackEntryId};
pub use queue::TriggerQueue;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Status returned by resolution processing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Resolution is complete, stack is empty.
    Complete,

    /// Waiting for a player to pass or respond.
    WaitingForPriority(PlayerId),

    /// Still processing (more abilities to resolve).
    Processing,
}
