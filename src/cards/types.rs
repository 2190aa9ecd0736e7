//! Card types, subtypes and the characteristics bundle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::mana::{ColorSet, ManaCost};

/// A card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardType {
    Artifact,
    Creature,
    Enchantment,
    Instant,
    Land,
    Planeswalker,
    Sorcery,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Artifact => "Artifact",
            CardType::Creature => "Creature",
            CardType::Enchantment => "Enchantment",
            CardType::Instant => "Instant",
            CardType::Land => "Land",
            CardType::Planeswalker => "Planeswalker",
            CardType::Sorcery => "Sorcery",
        };
        f.write_str(name)
    }
}

/// A subtype such as `Eldrazi` or `Forest`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Subtype(pub String);

impl Subtype {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The copiable values of a card.
///
/// A `CardInstance` keeps two of these: the printed values from its
/// definition and the current values after continuous effects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Characteristics {
    pub name: String,
    pub card_types: SmallVec<[CardType; 2]>,
    pub subtypes: Vec<Subtype>,
    pub colors: ColorSet,
    pub mana_cost: ManaCost,
    pub power: Option<i32>,
    pub toughness: Option<i32>,
}

impl Characteristics {
    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.card_types.contains(&card_type)
    }

    #[must_use]
    pub fn has_subtype(&self, subtype: &Subtype) -> bool {
        self.subtypes.contains(subtype)
    }

    /// Type line, e.g. `Creature - Eldrazi Processor`.
    #[must_use]
    pub fn type_line(&self) -> String {
        let types: Vec<_> = self.card_types.iter().map(ToString::to_string).collect();
        let mut line = types.join(" ");
        if !self.subtypes.is_empty() {
            let subtypes: Vec<_> = self.subtypes.iter().map(Subtype::as_str).collect();
            line.push_str(" - ");
            line.push_str(&subtypes.join(" "));
        }
        line
    }
}
