//! Entity identification system.
//!
//! Every game object (player, card, permanent, token) has a unique `EntityId`.
//! Target pointers and chosen targets store `EntityId`s, so a single id space
//! covers both "which player" and "which object".
//!
//! ## ID Layout
//!
//! - `0..player_count`: Reserved for players
//! - `player_count..`: Cards and other game objects
//!
//! ```
//! use ccg_rules::core::{EntityId, PlayerId};
//!
//! let player = EntityId::player(PlayerId::new(1));
//! assert!(player.is_player(2));
//! assert_eq!(player.as_player(2), Some(PlayerId::new(1)));
//!
//! let card = EntityId(10);
//! assert!(!card.is_player(2));
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Unique identifier for any game entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Placeholder source for ability templates that are not attached to a
    /// game object yet.
    pub const UNBOUND: Self = Self(u32::MAX);

    /// First id available for non-player objects in a game with `player_count` players.
    #[must_use]
    pub const fn first_non_player(player_count: usize) -> u32 {
        player_count as u32
    }

    /// Check if this entity ID refers to a player.
    #[must_use]
    pub const fn is_player(self, player_count: usize) -> bool {
        self.0 < player_count as u32
    }

    /// Convert to a `PlayerId` if this is a player entity.
    ///
    /// ```
    /// use ccg_rules::core::{EntityId, PlayerId};
    ///
    /// assert_eq!(EntityId(2).as_player(4), Some(PlayerId::new(2)));
    /// assert_eq!(EntityId(2).as_player(2), None);
    /// ```
    #[must_use]
    pub fn as_player(self, player_count: usize) -> Option<PlayerId> {
        if self.is_player(player_count) {
            Some(PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }

    /// Entity id of a player.
    #[must_use]
    pub const fn player(id: PlayerId) -> Self {
        Self(id.0 as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<PlayerId> for EntityId {
    fn from(id: PlayerId) -> Self {
        Self::player(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
