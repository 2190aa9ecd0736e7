//! Priority-based stack.
//!
//! Abilities are pushed onto a stack and resolve in LIFO order.
//! Players pass priority in turn order; when all pass, the top
//! of the stack resolves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abilities::{Ability, AbilityState};
use crate::core::PlayerId;
use crate::triggers::GameEvent;

/// Unique identifier for a stack entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackEntryId(pub u32);

impl StackEntryId {
    /// Create a new stack entry ID.
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

impl std::fmt::Display for StackEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StackEntry({})", self.0)
    }
}

/// An ability on the stack.
#[derive(Clone, Debug)]
pub struct StackEntry {
    /// Unique identifier for this entry.
    pub id: StackEntryId,

    /// The stack's own copy of the ability, targets chosen.
    pub ability: Ability,

    /// Who controls this entry (makes choices, gets priority after).
    pub controller: PlayerId,

    /// Where this occurrence is in its lifecycle.
    pub state: AbilityState,

    /// The event that triggered it, if any.
    pub event: Option<GameEvent>,
}

/// Priority-based stack.
///
/// 1. Abilities are pushed onto the stack
/// 2. Their controller gets priority
/// 3. Players pass priority in turn order
/// 4. When all players pass in sequence, top of stack resolves
/// 5. After resolution, the resolved entry's controller gets priority again
/// 6. Repeat until stack is empty
///
/// ## N-Player Support
///
/// Priority passes in player order (0 → 1 → 2 → ... → 0).
/// All players must pass consecutively for resolution to occur.
#[derive(Clone, Debug)]
pub struct PriorityStack {
    /// The stack (index 0 = bottom, last = top).
    entries: Vec<StackEntry>,

    /// Player who currently has priority.
    current_priority: PlayerId,

    /// Players who have passed since the last push or resolution.
    /// When this equals player_count, the top resolves.
    consecutive_passes: usize,

    /// Total player count.
    player_count: usize,

    /// Next stack entry ID.
    next_id: u32,
}

impl PriorityStack {
    /// Create a new priority stack for the given number of players.
    ///
    /// Priority starts with player 0.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            entries: Vec::new(),
            current_priority: PlayerId::new(0),
            consecutive_passes: 0,
            player_count,
            next_id: 0,
        }
    }

    /// Number of entries on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Peek at the top of the stack without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Get all entries on the stack (bottom to top).
    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Put an ability on the stack.
    ///
    /// This resets the pass counter and gives its controller priority.
    pub fn push(&mut self, ability: Ability, event: Option<GameEvent>) -> StackEntryId {
        let id = StackEntryId::new(self.next_id);
        self.next_id += 1;

        let controller = ability.controller_id;
        debug!(entry = %id, source = %ability.source_id, ability = %ability.id, "pushed onto stack");
        self.entries.push(StackEntry {
            id,
            ability,
            controller,
            state: AbilityState::Triggered,
            event,
        });

        self.consecutive_passes = 0;
        self.current_priority = controller;
        id
    }

    /// Player passes priority.
    ///
    /// Returns `true` if all players have now passed (stack should resolve).
    pub fn pass(&mut self, player: PlayerId) -> bool {
        if player != self.current_priority {
            return false;
        }

        self.consecutive_passes += 1;

        if self.all_passed() {
            true
        } else {
            self.advance_priority();
            false
        }
    }

    /// Have all players passed in sequence?
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.consecutive_passes >= self.player_count
    }

    /// Remove the top entry for resolution.
    ///
    /// Resets passes and gives priority to the entry's controller.
    pub fn pop_top(&mut self) -> Option<StackEntry> {
        let mut entry = self.entries.pop()?;
        entry.state = AbilityState::Resolving;

        self.consecutive_passes = 0;
        self.current_priority = entry.controller;
        Some(entry)
    }

    /// Get the player who currently has priority, or `None` when the stack
    /// is empty.
    #[must_use]
    pub fn priority_player(&self) -> Option<PlayerId> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.current_priority)
        }
    }

    /// Advance priority to the next player.
    fn advance_priority(&mut self) {
        let next = (self.current_priority.0 as usize + 1) % self.player_count;
        self.current_priority = PlayerId::new(next as u8);
    }
}
