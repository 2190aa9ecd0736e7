//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties of a card and the template
//! abilities every copy of the card gets. For example, "Murk Strider" costs
//! {3}{U}, is a 3/2 and has Devoid plus an enters-the-battlefield trigger.
//!
//! The templates are never attached to a game object themselves:
//! `instantiate` deep-copies them for each `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::instance::CardInstance;
use super::types::{CardType, Characteristics, Subtype};
use crate::abilities::{Ability, AbilityId};
use crate::core::{EntityId, PlayerId, Zone};
use crate::mana::ManaCost;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "Wars Toll"),
/// not a specific instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ```
/// use ccg_rules::cards::{CardDefinition, CardId, CardType};
///
/// let bears = CardDefinition::new(CardId::new(1), "Grizzly Bears", [CardType::Creature])
///     .with_mana_cost("{1}{G}")
///     .with_subtypes(["Bear"])
///     .with_power_toughness(2, 2);
///
/// assert_eq!(bears.characteristics.mana_cost.mana_value(), 2);
/// assert_eq!(bears.characteristics.power, Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Printed characteristics.
    pub characteristics: Characteristics,

    /// Ability templates, in printed order.
    abilities: Vec<Ability>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        card_types: impl IntoIterator<Item = CardType>,
    ) -> Self {
        Self {
            id,
            characteristics: Characteristics {
                name: name.into(),
                card_types: card_types.into_iter().collect::<SmallVec<_>>(),
                ..Characteristics::default()
            },
            abilities: Vec::new(),
        }
    }

    /// Set the mana cost; the card's colors follow the cost.
    ///
    /// Panics if `cost` is not a valid mana cost. Card definitions are
    /// written by hand, so a bad cost is a bug in the card.
    #[must_use]
    pub fn with_mana_cost(mut self, cost: &str) -> Self {
        let parsed = match ManaCost::parse(cost) {
            Ok(parsed) => parsed,
            Err(e) => panic!("Invalid mana cost {cost:?} on {}: {e}", self.characteristics.name),
        };
        self.characteristics.colors = parsed.colors();
        self.characteristics.mana_cost = parsed;
        self
    }

    #[must_use]
    pub fn with_subtypes<S: Into<String>>(mut self, subtypes: impl IntoIterator<Item = S>) -> Self {
        self.characteristics
            .subtypes
            .extend(subtypes.into_iter().map(Subtype::new));
        self
    }

    #[must_use]
    pub fn with_power_toughness(mut self, power: i32, toughness: i32) -> Self {
        self.characteristics.power = Some(power);
        self.characteristics.toughness = Some(toughness);
        self
    }

    /// Add an ability template (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.add_ability(ability);
        self
    }

    /// Add an ability template.
    ///
    /// Abilities are numbered in the order they are added.
    pub fn add_ability(&mut self, mut ability: Ability) -> AbilityId {
        let id = AbilityId::new(self.abilities.len() as u32);
        ability.id = id;
        self.abilities.push(ability);
        id
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.characteristics.name
    }

    /// Ability templates.
    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Create a game object for this card.
    ///
    /// Every ability is deep-copied and bound to the new object, so two
    /// instances of the same definition never share effect or target state.
    #[must_use]
    pub fn instantiate(&self, entity_id: EntityId, owner: PlayerId, zone: Zone) -> CardInstance {
        let abilities = self
            .abilities
            .iter()
            .map(|template| {
                let mut ability = template.clone();
                ability.bind(entity_id, owner);
                ability
            })
            .collect();

        CardInstance::new(entity_id, self.id, owner, zone, self.characteristics.clone(), abilities)
    }
}
