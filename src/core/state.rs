//! Game state: players, card objects, zones and the event log.
//!
//! ## GameState
//!
//! Everything an effect can read or mutate:
//! - Players (life, mana pool, in-game flag)
//! - Card objects and the zones they are in
//! - The trigger registry for objects on the battlefield
//! - The event log and the buffer of events not yet checked for triggers
//! - RNG
//!
//! ## PublicSnapshot
//!
//! The observable part of the state in a serializable form, used to compare
//! independent copies of a game.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{GameConfig, Zone};
use super::entity::EntityId;
use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::abilities::AbilityKind;
use crate::cards::{CardDefinition, CardInstance, CardType};
use crate::effects::{ContinuousEffect, Duration, Layer};
use crate::filter::{Filter, FilterContext};
use crate::mana::ManaColor;
use crate::triggers::{GameEvent, TriggerRegistry};
use crate::zones::{ZoneKey, ZoneManager};

/// Full game state.
///
/// Not `Clone`: copying a game must fork the RNG, see `clone_state`.
#[derive(Debug)]
pub struct GameState {
    pub players: PlayerMap<Player>,

    /// Card locations.
    pub zones: ZoneManager,

    /// Card objects by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Triggered abilities of objects on the battlefield.
    pub triggers: TriggerRegistry,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Every event so far.
    events: Vector<GameEvent>,

    /// Events not yet checked for triggers.
    pending_events: Vec<GameEvent>,

    next_entity_id: u32,
    next_timestamp: u64,
}

impl GameState {
    /// Create a new game state.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let player_count = config.player_count;
        Self {
            players: PlayerMap::new(player_count, |id| Player::new(id, config.starting_life)),
            zones: ZoneManager::new(),
            cards: FxHashMap::default(),
            triggers: TriggerRegistry::new(),
            active_player: PlayerId::new(0),
            rng: GameRng::new(config.seed),
            events: Vector::new(),
            pending_events: Vec::new(),
            next_entity_id: EntityId::first_non_player(player_count),
            next_timestamp: 1,
        }
    }

    /// Get player count, including players who have left.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Players ===

    /// A player still in the game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id).filter(|p| p.in_game)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id).filter(|p| p.in_game)
    }

    /// Is `other` an opponent of `you`? Players who left are nobody's opponent.
    #[must_use]
    pub fn is_opponent(&self, you: PlayerId, other: PlayerId) -> bool {
        you != other && self.player(other).is_some()
    }

    /// Opponents of `you`, in player order.
    #[must_use]
    pub fn opponents(&self, you: PlayerId) -> Vec<PlayerId> {
        self.players
            .player_ids()
            .filter(|&p| self.is_opponent(you, p))
            .collect()
    }

    pub fn add_mana(&mut self, player: PlayerId, color: ManaColor, amount: u32) -> EngineResult<()> {
        let player = self
            .player_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        player.mana_pool.add(color, amount);
        Ok(())
    }

    // === Entity Management ===

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    fn next_timestamp(&mut self) -> u64 {
        let ts = self.next_timestamp;
        self.next_timestamp += 1;
        ts
    }

    /// Create a game object for `definition` directly in `zone`.
    ///
    /// This is game setup, not a zone change: no events are emitted and a
    /// permanent created this way is not summoning sick.
    pub fn create_card(&mut self, definition: &CardDefinition, owner: PlayerId, zone: Zone) -> EntityId {
        let id = self.alloc_entity();
        let mut card = definition.instantiate(id, owner, zone);
        card.timestamp = self.next_timestamp();

        self.zones.add_to_zone(id, ZoneKey::for_card(zone, owner));
        if zone == Zone::Battlefield {
            self.triggers.register_all(id, &card.abilities);
        }
        self.cards.insert(id, card);
        self.apply_continuous_effects();
        id
    }

    /// Get a card object in any zone.
    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Get a card object only if it is on the battlefield.
    #[must_use]
    pub fn permanent(&self, id: EntityId) -> Option<&CardInstance> {
        self.card(id).filter(|c| c.is_on_battlefield())
    }

    /// How many times an object has changed zones. Players and unknown ids
    /// have never moved.
    #[must_use]
    pub fn zone_changes(&self, id: EntityId) -> u32 {
        self.card(id).map_or(0, |c| c.zone_changes)
    }

    #[must_use]
    pub fn controller_of(&self, id: EntityId) -> Option<PlayerId> {
        self.card(id).map(|c| c.controller)
    }

    // === Queries ===

    /// Permanents matching `filter` as seen by `ctx`, in battlefield order.
    ///
    /// Permanents of players who left the game are not active.
    #[must_use]
    pub fn active_permanents(&self, filter: &Filter, ctx: &FilterContext) -> Vec<EntityId> {
        self.battlefield()
            .filter(|card| self.player(card.controller).is_some())
            .filter(|card| filter.matches(card, ctx, self))
            .map(|card| card.id)
            .collect()
    }

    /// Every active permanent of a card type, regardless of controller.
    #[must_use]
    pub fn all_active_permanents(&self, card_type: CardType) -> Vec<EntityId> {
        self.battlefield()
            .filter(|card| self.player(card.controller).is_some() && card.has_type(card_type))
            .map(|card| card.id)
            .collect()
    }

    fn battlefield(&self) -> impl Iterator<Item = &CardInstance> {
        self.zones
            .cards_in(ZoneKey::shared(Zone::Battlefield))
            .iter()
            .filter_map(|id| self.cards.get(id))
    }

    /// Cards in a zone across owners, in deterministic order.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> Vec<EntityId> {
        self.zones.cards_in_zone(zone)
    }

    /// Creatures currently attacking.
    #[must_use]
    pub fn attackers(&self) -> Vec<EntityId> {
        self.battlefield()
            .filter(|card| card.attacking.is_some())
            .map(|card| card.id)
            .collect()
    }

    // === Permanent State ===

    /// Tap a permanent. Tapping a tapped permanent changes nothing and
    /// emits nothing. Returns whether the permanent became tapped.
    pub fn tap(&mut self, id: EntityId) -> bool {
        let Some(card) = self.cards.get_mut(&id).filter(|c| c.is_on_battlefield()) else {
            return false;
        };
        if !card.tap() {
            return false;
        }
        let event = GameEvent::tapped(id, card.controller);
        self.emit(event);
        true
    }

    /// Untap a permanent. Returns whether it became untapped.
    pub fn untap(&mut self, id: EntityId) -> bool {
        self.cards
            .get_mut(&id)
            .filter(|c| c.is_on_battlefield())
            .is_some_and(CardInstance::untap)
    }

    // === Zone Changes ===

    /// Move a card to `to`, owned zones going to its owner's.
    ///
    /// Returns the zone it came from. Moving a card to the zone it is
    /// already in does nothing.
    pub fn move_card(&mut self, id: EntityId, to: Zone) -> EngineResult<Zone> {
        self.relocate(id, to, None)
    }

    /// Put a card onto the battlefield under `controller`'s control.
    pub fn enter_battlefield(&mut self, id: EntityId, controller: PlayerId) -> EngineResult<Zone> {
        if self.player(controller).is_none() {
            return Err(EngineError::UnknownPlayer(controller));
        }
        self.relocate(id, Zone::Battlefield, Some(controller))
    }

    fn relocate(&mut self, id: EntityId, to: Zone, controller: Option<PlayerId>) -> EngineResult<Zone> {
        let from = self.card(id).ok_or(EngineError::UnknownObject(id))?.zone;
        if from == to {
            return Ok(from);
        }

        let timestamp = self.next_timestamp();
        let card = self.cards.get_mut(&id).ok_or(EngineError::UnknownObject(id))?;
        let owner = card.owner;

        if from == Zone::Battlefield {
            card.clear_permanent_state();
            self.triggers.remove_for_source(id);
        }
        card.zone = to;
        card.timestamp = timestamp;
        card.zone_changes += 1;
        if to == Zone::Battlefield {
            card.set_controller(controller.unwrap_or(owner));
            card.summoning_sick = true;
            self.triggers.register_all(id, &card.abilities);
        }
        let now_controller = card.controller;

        self.zones.move_to_zone(id, ZoneKey::for_card(to, owner));
        debug!(card = %id, %from, %to, "zone change");

        self.emit(GameEvent::zone_changed(id, owner, from, to));
        if to == Zone::Battlefield {
            self.emit(GameEvent::entered_battlefield(id, now_controller));
        }
        self.apply_continuous_effects();
        Ok(from)
    }

    // === Continuous Effects ===

    /// Rebuild every object's current characteristics: reset to printed
    /// values, then apply every active static ability by layer, then
    /// timestamp.
    pub fn apply_continuous_effects(&mut self) {
        for card in self.cards.values_mut() {
            card.reset_characteristics();
        }

        let mut active: Vec<(Layer, u64, EntityId, PlayerId, Box<dyn ContinuousEffect>)> = Vec::new();
        for card in self.cards.values() {
            for ability in &card.abilities {
                let AbilityKind::Static { effects } = &ability.kind else {
                    continue;
                };
                for effect in effects {
                    if card.is_on_battlefield() || effect.duration() == Duration::Always {
                        active.push((effect.layer(), card.timestamp, card.id, card.controller, effect.clone()));
                    }
                }
            }
        }

        active.sort_by_key(|(layer, timestamp, id, _, _)| (*layer, *timestamp, *id));
        for (_, _, source, controller, effect) in active {
            effect.apply(source, controller, self);
        }
    }

    // === Events ===

    /// Record an event and queue it for trigger checks.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event.clone());
        self.pending_events.push(event);
    }

    /// Every event so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Drain the events not yet checked for triggers.
    pub fn take_pending_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    #[must_use]
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // === Cloning ===

    /// Clone the game state for an independent simulation.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            players: self.players.clone(),
            zones: self.zones.clone(),
            cards: self.cards.clone(),
            triggers: self.triggers.clone(),
            active_player: self.active_player,
            rng: self.rng.fork(),
            events: self.events.clone(),
            pending_events: self.pending_events.clone(),
            next_entity_id: self.next_entity_id,
            next_timestamp: self.next_timestamp,
        }
    }

    // === Snapshots ===

    /// Observable state: players, the battlefield and zone sizes.
    #[must_use]
    pub fn public_snapshot(&self) -> PublicSnapshot {
        let battlefield = self
            .battlefield()
            .map(|card| PermanentSummary {
                id: card.id,
                name: card.name().to_string(),
                controller: card.controller,
                tapped: card.tapped,
                attacking: card.attacking,
            })
            .collect();

        let mut zone_sizes = Vec::new();
        for zone in Zone::ALL {
            if zone.is_per_player() {
                for player in self.players.player_ids() {
                    let key = ZoneKey::for_card(zone, player);
                    zone_sizes.push((key, self.zones.zone_size(key)));
                }
            } else {
                let key = ZoneKey::shared(zone);
                zone_sizes.push((key, self.zones.zone_size(key)));
            }
        }

        PublicSnapshot {
            players: self.players.iter().map(|(_, p)| p.clone()).collect(),
            battlefield,
            zone_sizes,
            event_count: self.events.len(),
        }
    }

    /// `public_snapshot` encoded with bincode.
    pub fn snapshot(&self) -> EngineResult<Vec<u8>> {
        bincode::serialize(&self.public_snapshot()).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}

/// One permanent as every player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentSummary {
    pub id: EntityId,
    pub name: String,
    pub controller: PlayerId,
    pub tapped: bool,
    pub attacking: Option<EntityId>,
}

/// Observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSnapshot {
    pub players: Vec<Player>,
    pub battlefield: Vec<PermanentSummary>,
    pub zone_sizes: Vec<(ZoneKey, usize)>,
    pub event_count: usize,
}
