//! Basic lands and vanilla cards for building test boards.

use crate::abilities::Ability;
use crate::cards::{CardDefinition, CardId, CardType};
use crate::mana::ManaColor;

pub const PLAINS: CardId = CardId::new(1);
pub const ISLAND: CardId = CardId::new(2);
pub const SWAMP: CardId = CardId::new(3);
pub const MOUNTAIN: CardId = CardId::new(4);
pub const FOREST: CardId = CardId::new(5);
pub const GRIZZLY_BEARS: CardId = CardId::new(10);
pub const HILL_GIANT: CardId = CardId::new(11);
pub const PLANESWALKER: CardId = CardId::new(12);

/// The basic land that taps for `color`, if there is one. Colorless mana
/// has no basic land.
#[must_use]
pub fn basic_land(color: ManaColor) -> Option<CardDefinition> {
    let (id, name) = match color {
        ManaColor::White => (PLAINS, "Plains"),
        ManaColor::Blue => (ISLAND, "Island"),
        ManaColor::Black => (SWAMP, "Swamp"),
        ManaColor::Red => (MOUNTAIN, "Mountain"),
        ManaColor::Green => (FOREST, "Forest"),
        ManaColor::Colorless => return None,
    };
    Some(basic(id, name, color))
}

fn basic(id: CardId, name: &str, color: ManaColor) -> CardDefinition {
    CardDefinition::new(id, name, [CardType::Land])
        .with_subtypes([name])
        .with_ability(Ability::mana(color))
}

#[must_use]
pub fn forest() -> CardDefinition {
    basic(FOREST, "Forest", ManaColor::Green)
}

#[must_use]
pub fn mountain() -> CardDefinition {
    basic(MOUNTAIN, "Mountain", ManaColor::Red)
}

#[must_use]
pub fn grizzly_bears() -> CardDefinition {
    CardDefinition::new(GRIZZLY_BEARS, "Grizzly Bears", [CardType::Creature])
        .with_mana_cost("{1}{G}")
        .with_subtypes(["Bear"])
        .with_power_toughness(2, 2)
}

#[must_use]
pub fn hill_giant() -> CardDefinition {
    CardDefinition::new(HILL_GIANT, "Hill Giant", [CardType::Creature])
        .with_mana_cost("{3}{R}")
        .with_subtypes(["Giant"])
        .with_power_toughness(3, 3)
}

/// A planeswalker with no abilities, to attack.
#[must_use]
pub fn planeswalker() -> CardDefinition {
    CardDefinition::new(PLANESWALKER, "Wandering Planeswalker", [CardType::Planeswalker]).with_mana_cost("{2}{W}{U}")
}

/// Every card in this module.
#[must_use]
pub fn all() -> Vec<CardDefinition> {
    let mut cards: Vec<_> = ManaColor::COLORS.into_iter().filter_map(basic_land).collect();
    cards.extend([grizzly_bears(), hill_giant(), planeswalker()]);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityKind;
    use crate::cards::Subtype;

    #[test]
    fn test_basic_lands_tap_for_their_color() {
        for color in ManaColor::COLORS {
            let land = basic_land(color).unwrap();
            assert!(land.characteristics.has_type(CardType::Land));
            assert!(land.characteristics.colors.is_colorless());
            assert!(matches!(
                land.abilities()[0].kind,
                AbilityKind::Mana { produces } if produces == color
            ));
        }
        assert!(forest().characteristics.has_subtype(&Subtype::new("Forest")));
    }

    #[test]
    fn test_no_colorless_basic() {
        assert!(basic_land(ManaColor::Colorless).is_none());
        assert_eq!(all().len(), 8);
    }
}
