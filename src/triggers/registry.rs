//! Trigger registry.
//!
//! The registry indexes the triggered abilities of objects on the
//! battlefield by event type. `GameState` registers an object's abilities
//! when it enters the battlefield and removes them when it leaves; the
//! abilities themselves stay on the `CardInstance`.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::event::{EventType, GameEvent};
use crate::abilities::{Ability, AbilityId, AbilityKind};
use crate::core::{EntityId, GameState};

/// A triggered ability ready to be put on the stack.
///
/// `ability` is an independent copy of the object's ability with its
/// effects' target pointers already bound to the triggering event.
#[derive(Clone, Debug)]
pub struct TriggeredAbility {
    pub ability: Ability,

    /// The event that caused this trigger.
    pub event: GameEvent,

    /// Timestamp of the source object when it triggered.
    pub timestamp: u64,
}

impl TriggeredAbility {
    /// Ordering key: source timestamp, then source id, then ability id.
    #[must_use]
    pub fn order_key(&self) -> (u64, EntityId, AbilityId) {
        (self.timestamp, self.ability.source_id, self.ability.id)
    }
}

/// Registry for triggered abilities.
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry {
    /// Index by event type for fast lookup.
    by_event_type: FxHashMap<EventType, Vec<(EntityId, AbilityId)>>,
}

impl TriggerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one ability of `source` under `event_type`.
    pub fn register(&mut self, event_type: EventType, source: EntityId, ability: AbilityId) {
        let entries = self.by_event_type.entry(event_type).or_default();
        if !entries.contains(&(source, ability)) {
            entries.push((source, ability));
        }
    }

    /// Register every triggered ability in `abilities`.
    pub fn register_all(&mut self, source: EntityId, abilities: &[Ability]) {
        for ability in abilities {
            if let AbilityKind::Triggered { trigger, .. } = &ability.kind {
                self.register(trigger.event_type(), source, ability.id);
            }
        }
    }

    /// Remove all abilities registered for a source entity.
    pub fn remove_for_source(&mut self, source: EntityId) {
        for entries in self.by_event_type.values_mut() {
            entries.retain(|(s, _)| *s != source);
        }
        self.by_event_type.retain(|_, entries| !entries.is_empty());
    }

    /// Abilities registered for an event type, in registration order.
    #[must_use]
    pub fn registered(&self, event_type: EventType) -> &[(EntityId, AbilityId)] {
        self.by_event_type.get(&event_type).map_or(&[][..], Vec::as_slice)
    }

    /// Get total registered ability count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_event_type.values().map(Vec::len).sum()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_event_type.is_empty()
    }

    /// Find every ability that `event` triggers.
    ///
    /// Only active permanents trigger: the permanents of players who left
    /// the game are skipped.
    ///
    /// Returns bound copies sorted by source timestamp, then source id,
    /// then ability id, so the same game always yields the same order.
    #[must_use]
    pub fn find_triggers(&self, event: &GameEvent, state: &GameState) -> Vec<TriggeredAbility> {
        let mut results = Vec::new();

        for &(source, ability_id) in self.registered(event.event_type) {
            let Some(card) = state.permanent(source) else {
                continue;
            };
            if state.player(card.controller).is_none() {
                trace!(source = %source, "controller has left the game");
                continue;
            }
            let Some(ability) = card.ability(ability_id) else {
                continue;
            };
            let AbilityKind::Triggered { trigger, .. } = &ability.kind else {
                continue;
            };

            if !trigger.check(event, ability, state) {
                trace!(source = %source, ability = %ability_id, event = ?event.event_type, "trigger did not match");
                continue;
            }

            let mut triggered = ability.clone();
            if let Some(pointer) = trigger.bind(event, state) {
                triggered.set_target_pointer(pointer);
            }
            debug!(
                source = %source,
                ability = %ability_id,
                event = ?event.event_type,
                subject = %event.target_id,
                "ability triggered"
            );

            results.push(TriggeredAbility {
                ability: triggered,
                event: event.clone(),
                timestamp: card.timestamp,
            });
        }

        results.sort_by_key(TriggeredAbility::order_key);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_remove() {
        let mut registry = TriggerRegistry::new();
        registry.register(EventType::Tapped, EntityId(10), AbilityId::new(0));
        registry.register(EventType::Tapped, EntityId(11), AbilityId::new(0));
        registry.register(EventType::AttackerDeclared, EntityId(10), AbilityId::new(1));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.registered(EventType::Tapped).len(), 2);

        registry.remove_for_source(EntityId(10));

        assert_eq!(registry.len(), 1);
        assert!(registry.registered(EventType::AttackerDeclared).is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TriggerRegistry::new();
        registry.register(EventType::Tapped, EntityId(10), AbilityId::new(0));
        registry.register(EventType::Tapped, EntityId(10), AbilityId::new(0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = TriggerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.registered(EventType::ZoneChanged).is_empty());
    }
}
