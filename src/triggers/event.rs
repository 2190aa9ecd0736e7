//! Game event types.
//!
//! Events record things that happened. `GameState` appends every event to
//! its log and to a pending buffer; `Game::process_events` drains the buffer
//! and hands each event to the `TriggerRegistry`.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId, Zone};
use crate::mana::ManaColor;

/// Kind of event. Triggers are indexed by this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A permanent became tapped.
    Tapped,
    /// A permanent was tapped for mana.
    TappedForMana,
    /// A creature was declared as an attacker.
    AttackerDeclared,
    /// An object moved from one zone to another.
    ZoneChanged,
    /// An object entered the battlefield.
    EnteredBattlefield,
}

/// A game event with contextual data.
///
/// ## Event Data
///
/// - `target_id`: the object the event is about
/// - `player_id`: the player associated with it (usually the controller)
/// - `defender_id`: for attacks, the player or planeswalker attacked
/// - `from_zone` / `to_zone`: for zone changes
/// - `mana`: for mana abilities, the mana produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub event_type: EventType,
    pub target_id: EntityId,
    pub player_id: Option<PlayerId>,
    pub defender_id: Option<EntityId>,
    pub from_zone: Option<Zone>,
    pub to_zone: Option<Zone>,
    pub mana: Option<ManaColor>,
}

impl GameEvent {
    /// Create a new event about `target_id`.
    #[must_use]
    pub fn new(event_type: EventType, target_id: EntityId) -> Self {
        Self {
            event_type,
            target_id,
            player_id: None,
            defender_id: None,
            from_zone: None,
            to_zone: None,
            mana: None,
        }
    }

    /// Set the associated player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player_id = Some(player);
        self
    }

    #[must_use]
    pub fn with_defender(mut self, defender: EntityId) -> Self {
        self.defender_id = Some(defender);
        self
    }

    #[must_use]
    pub fn with_zones(mut self, from: Zone, to: Zone) -> Self {
        self.from_zone = Some(from);
        self.to_zone = Some(to);
        self
    }

    #[must_use]
    pub fn with_mana(mut self, mana: ManaColor) -> Self {
        self.mana = Some(mana);
        self
    }
}

/// Builders for the events the engine fires.
impl GameEvent {
    #[must_use]
    pub fn tapped(permanent: EntityId, controller: PlayerId) -> Self {
        Self::new(EventType::Tapped, permanent).with_player(controller)
    }

    #[must_use]
    pub fn tapped_for_mana(permanent: EntityId, controller: PlayerId, mana: ManaColor) -> Self {
        Self::new(EventType::TappedForMana, permanent)
            .with_player(controller)
            .with_mana(mana)
    }

    #[must_use]
    pub fn attacker_declared(attacker: EntityId, controller: PlayerId, defender: EntityId) -> Self {
        Self::new(EventType::AttackerDeclared, attacker)
            .with_player(controller)
            .with_defender(defender)
    }

    #[must_use]
    pub fn zone_changed(card: EntityId, owner: PlayerId, from: Zone, to: Zone) -> Self {
        Self::new(EventType::ZoneChanged, card)
            .with_player(owner)
            .with_zones(from, to)
    }

    #[must_use]
    pub fn entered_battlefield(permanent: EntityId, controller: PlayerId) -> Self {
        Self::new(EventType::EnteredBattlefield, permanent).with_player(controller)
    }
}
