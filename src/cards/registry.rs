//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game.
//! It provides fast lookup by `CardId` or by name.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use ccg_rules::cards::{CardRegistry, CardDefinition, CardId, CardType};
///
/// let mut registry = CardRegistry::new();
///
/// let bears = CardDefinition::new(CardId::new(1), "Grizzly Bears", [CardType::Creature])
///     .with_power_toughness(2, 2);
///
/// registry.register(bears);
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name(), "Grizzly Bears");
/// assert_eq!(registry.by_name("Grizzly Bears").map(|c| c.id), Some(CardId::new(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    names: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID or name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.names.contains_key(card.name()) {
            panic!("Card named {:?} already registered", card.name());
        }
        self.names.insert(card.name().to_string(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.names.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All registered IDs, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort();
        ids
    }
}
