//! Card instances - runtime card state.
//!
//! `CardInstance` is one card in one game. Besides its zone, owner and
//! controller it tracks permanent state (tapped, summoning sickness,
//! attacking) and carries its own bound copies of the definition's
//! abilities.
//!
//! ## Characteristics
//!
//! `printed` never changes after creation. `current` is rebuilt from
//! `printed` every time continuous effects are applied, so effects like
//! Devoid only ever touch `current`.

use super::definition::CardId;
use super::types::{CardType, Characteristics};
use crate::abilities::{Ability, AbilityId};
use crate::core::{EntityId, PlayerId, Zone};
use crate::mana::ColorSet;

/// A card instance in a game.
#[derive(Clone, Debug)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Owner (who started with this card).
    pub owner: PlayerId,

    /// Controller. Equal to the owner outside the battlefield.
    pub controller: PlayerId,

    /// Current zone. Kept in sync with the `ZoneManager` by `GameState`.
    pub zone: Zone,

    /// Values from the card definition.
    pub printed: Characteristics,

    /// Values after continuous effects.
    pub current: Characteristics,

    pub tapped: bool,

    /// Came under its controller's control this turn.
    pub summoning_sick: bool,

    /// What this creature is attacking, if it is attacking.
    pub attacking: Option<EntityId>,

    /// Assigned each time the card changes zones. Later objects have
    /// larger timestamps.
    pub timestamp: u64,

    /// How many times the card has changed zones. After a zone change it is
    /// a new object, and references recorded earlier no longer reach it.
    pub zone_changes: u32,

    /// Bound copies of the definition's abilities.
    pub abilities: Vec<Ability>,
}

impl CardInstance {
    /// Create a card instance owned and controlled by `owner`.
    #[must_use]
    pub fn new(
        id: EntityId,
        card_id: CardId,
        owner: PlayerId,
        zone: Zone,
        printed: Characteristics,
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            id,
            card_id,
            owner,
            controller: owner,
            zone,
            current: printed.clone(),
            printed,
            tapped: false,
            summoning_sick: false,
            attacking: None,
            timestamp: 0,
            zone_changes: 0,
            abilities,
        }
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.current.name
    }

    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.current.has_type(card_type)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.has_type(CardType::Creature)
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.has_type(CardType::Land)
    }

    #[must_use]
    pub fn is_planeswalker(&self) -> bool {
        self.has_type(CardType::Planeswalker)
    }

    #[must_use]
    pub fn colors(&self) -> ColorSet {
        self.current.colors
    }

    #[must_use]
    pub fn is_on_battlefield(&self) -> bool {
        self.zone == Zone::Battlefield
    }

    /// Look up one of this object's abilities.
    #[must_use]
    pub fn ability(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == id)
    }

    /// Tap this object. Returns false if it was already tapped.
    pub fn tap(&mut self) -> bool {
        !std::mem::replace(&mut self.tapped, true)
    }

    /// Untap this object. Returns false if it was already untapped.
    pub fn untap(&mut self) -> bool {
        std::mem::replace(&mut self.tapped, false)
    }

    /// Change the controller, rebinding every ability.
    pub fn set_controller(&mut self, controller: PlayerId) {
        self.controller = controller;
        for ability in &mut self.abilities {
            ability.controller_id = controller;
        }
    }

    /// Drop all continuous-effect changes.
    pub fn reset_characteristics(&mut self) {
        self.current.clone_from(&self.printed);
    }

    /// Forget permanent state when the object leaves the battlefield.
    pub fn clear_permanent_state(&mut self) {
        self.tapped = false;
        self.summoning_sick = false;
        self.attacking = None;
        self.set_controller(self.owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn bear(id: u32) -> CardInstance {
        let printed = Characteristics {
            name: "Grizzly Bears".to_string(),
            card_types: smallvec![CardType::Creature],
            power: Some(2),
            toughness: Some(2),
            ..Characteristics::default()
        };
        CardInstance::new(EntityId(id), CardId::new(1), PlayerId::new(0), Zone::Hand, printed, Vec::new())
    }

    #[test]
    fn test_card_instance_new() {
        let instance = bear(10);

        assert_eq!(instance.id, EntityId(10));
        assert_eq!(instance.owner, PlayerId::new(0));
        assert_eq!(instance.controller, PlayerId::new(0));
        assert!(instance.is_creature());
        assert!(!instance.is_land());
        assert_eq!(instance.current, instance.printed);
    }

    #[test]
    fn test_tap_is_idempotent() {
        let mut instance = bear(10);

        assert!(instance.tap());
        assert!(!instance.tap());
        assert!(instance.tapped);

        assert!(instance.untap());
        assert!(!instance.untap());
    }

    #[test]
    fn test_controller_change() {
        let mut instance = bear(10);
        instance.set_controller(PlayerId::new(1));
        assert_eq!(instance.controller, PlayerId::new(1));
        assert_eq!(instance.owner, PlayerId::new(0));

        instance.clear_permanent_state();
        assert_eq!(instance.controller, PlayerId::new(0));
    }

    #[test]
    fn test_reset_characteristics() {
        let mut instance = bear(10);
        instance.current.power = Some(5);
        instance.reset_characteristics();
        assert_eq!(instance.current.power, Some(2));
    }
}
