//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone every card is in and keeps the order
//! of cards inside each zone:
//! - Per-player zones (library, hand, graveyard) are keyed by owner
//! - Shared zones (battlefield, exile, stack, command) have a single list
//! - Order is kept for every zone so iteration is deterministic; for the
//!   battlefield it is simply entry order

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::Zone;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A concrete zone instance: the zone plus its owner for per-player zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneKey {
    pub zone: Zone,
    pub owner: Option<PlayerId>,
}

impl ZoneKey {
    /// Key for a card owned by `owner` going to `zone`.
    ///
    /// Shared zones ignore the owner.
    #[must_use]
    pub fn for_card(zone: Zone, owner: PlayerId) -> Self {
        Self {
            zone,
            owner: zone.is_per_player().then_some(owner),
        }
    }

    /// Key for a shared zone.
    #[must_use]
    pub const fn shared(zone: Zone) -> Self {
        Self { zone, owner: None }
    }
}

/// Manages card locations across zones.
///
/// ```
/// use ccg_rules::core::{EntityId, PlayerId, Zone};
/// use ccg_rules::zones::{ZoneKey, ZoneManager};
///
/// let mut manager = ZoneManager::new();
/// let library = ZoneKey::for_card(Zone::Library, PlayerId::new(0));
///
/// manager.add_to_zone(EntityId(10), library);
/// manager.add_to_zone(EntityId(11), library);
///
/// assert_eq!(manager.cards_in(library), &[EntityId(10), EntityId(11)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone
    locations: FxHashMap<EntityId, ZoneKey>,

    /// Card order per zone instance (index 0 = bottom).
    zone_order: FxHashMap<ZoneKey, Vec<EntityId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card on top of a zone.
    ///
    /// Panics if the entity is already in the manager.
    pub fn add_to_zone(&mut self, entity: EntityId, key: ZoneKey) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }

        self.locations.insert(entity, key);
        self.zone_order.entry(key).or_default().push(entity);
    }

    /// Move a card on top of another zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, entity: EntityId, new_key: ZoneKey) -> Option<ZoneKey> {
        let old_key = self.locations.get(&entity).copied()?;

        if old_key == new_key {
            return Some(old_key);
        }

        if let Some(order) = self.zone_order.get_mut(&old_key) {
            order.retain(|&e| e != entity);
        }

        self.locations.insert(entity, new_key);
        self.zone_order.entry(new_key).or_default().push(entity);

        Some(old_key)
    }

    /// Check if a card is in a zone, whoever owns that zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.locations.get(&entity).is_some_and(|k| k.zone == zone)
    }

    /// Cards in one zone instance, bottom to top.
    #[must_use]
    pub fn cards_in(&self, key: ZoneKey) -> &[EntityId] {
        self.zone_order.get(&key).map_or(&[][..], Vec::as_slice)
    }

    /// All cards in a zone across owners.
    ///
    /// Owners are visited in player order, cards bottom to top, so the result
    /// is the same for two copies of the same game.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> Vec<EntityId> {
        let mut keys: Vec<_> = self.zone_order.keys().filter(|k| k.zone == zone).collect();
        keys.sort();
        keys.into_iter()
            .flat_map(|k| self.zone_order[k].iter().copied())
            .collect()
    }

    /// Number of cards in one zone instance.
    #[must_use]
    pub fn zone_size(&self, key: ZoneKey) -> usize {
        self.cards_in(key).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(player: u8) -> ZoneKey {
        ZoneKey::for_card(Zone::Library, PlayerId::new(player))
    }

    #[test]
    fn test_zone_key_for_card() {
        let graveyard = ZoneKey::for_card(Zone::Graveyard, PlayerId::new(1));
        assert_eq!(graveyard.owner, Some(PlayerId::new(1)));

        let exile = ZoneKey::for_card(Zone::Exile, PlayerId::new(1));
        assert_eq!(exile, ZoneKey::shared(Zone::Exile));
    }

    #[test]
    fn test_ordered_zone() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(EntityId(11), library(0));
        manager.add_to_zone(EntityId(10), library(0));
        manager.add_to_zone(EntityId(12), library(0));

        assert_eq!(manager.cards_in(library(0)), &[EntityId(11), EntityId(10), EntityId(12)]);

        // Leaving and coming back puts a card on top again.
        let graveyard = ZoneKey::for_card(Zone::Graveyard, PlayerId::new(0));
        manager.move_to_zone(EntityId(11), graveyard);
        manager.move_to_zone(EntityId(11), library(0));
        assert_eq!(manager.cards_in(library(0)), &[EntityId(10), EntityId(12), EntityId(11)]);
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new();
        let battlefield = ZoneKey::shared(Zone::Battlefield);

        manager.add_to_zone(EntityId(10), library(0));
        let old = manager.move_to_zone(EntityId(10), battlefield);

        assert_eq!(old, Some(library(0)));
        assert!(manager.is_in_zone(EntityId(10), Zone::Battlefield));
        assert_eq!(manager.zone_size(library(0)), 0);
        assert_eq!(manager.zone_size(battlefield), 1);
    }

    #[test]
    fn test_move_unknown_entity() {
        let mut manager = ZoneManager::new();
        assert_eq!(manager.move_to_zone(EntityId(5), library(0)), None);
    }

    #[test]
    fn test_cards_in_zone_across_owners() {
        let mut manager = ZoneManager::new();
        let gy1 = ZoneKey::for_card(Zone::Graveyard, PlayerId::new(1));
        let gy0 = ZoneKey::for_card(Zone::Graveyard, PlayerId::new(0));

        manager.add_to_zone(EntityId(20), gy1);
        manager.add_to_zone(EntityId(10), gy0);
        manager.add_to_zone(EntityId(11), gy0);

        assert_eq!(
            manager.cards_in_zone(Zone::Graveyard),
            vec![EntityId(10), EntityId(11), EntityId(20)]
        );
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_duplicate_entity_panics() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(EntityId(10), library(0));
        manager.add_to_zone(EntityId(10), library(0));
    }
}
