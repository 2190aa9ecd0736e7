//! Attack eligibility.
//!
//! Only what forced attacks need: who can attack and what they can attack.
//! Blocking and combat damage are not modelled.

use crate::cards::{CardInstance, CardType};
use crate::core::{EntityId, GameState, PlayerId};

/// Can this creature be declared as an attacker right now?
#[must_use]
pub fn can_attack(creature: &CardInstance) -> bool {
    creature.is_on_battlefield()
        && creature.is_creature()
        && !creature.tapped
        && !creature.summoning_sick
        && creature.attacking.is_none()
}

/// What a creature can attack when attacking `defending_player`: the
/// player, then each planeswalker they control.
///
/// Empty if the player has left the game.
#[must_use]
pub fn possible_defenders(defending_player: PlayerId, state: &GameState) -> Vec<EntityId> {
    if state.player(defending_player).is_none() {
        return Vec::new();
    }

    let mut defenders = vec![EntityId::player(defending_player)];
    defenders.extend(
        state
            .all_active_permanents(CardType::Planeswalker)
            .into_iter()
            .filter(|&id| state.controller_of(id) == Some(defending_player)),
    );
    defenders
}

/// Can a creature controlled by `attacking_player` attack `defender`?
#[must_use]
pub fn is_legal_defender(defender: EntityId, attacking_player: PlayerId, state: &GameState) -> bool {
    if let Some(player) = defender.as_player(state.player_count()) {
        return state.is_opponent(attacking_player, player);
    }
    state.permanent(defender).is_some_and(|walker| {
        walker.is_planeswalker() && state.is_opponent(attacking_player, walker.controller)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::{GameConfig, Zone};

    fn defs() -> (CardDefinition, CardDefinition) {
        let bear = CardDefinition::new(CardId::new(1), "Bear", [CardType::Creature]).with_power_toughness(2, 2);
        let walker = CardDefinition::new(CardId::new(2), "Walker", [CardType::Planeswalker]);
        (bear, walker)
    }

    #[test]
    fn test_can_attack() {
        let (bear, _) = defs();
        let mut state = GameState::new(&GameConfig::new(2));
        let ready = state.create_card(&bear, PlayerId::new(0), Zone::Battlefield);
        let in_hand = state.create_card(&bear, PlayerId::new(0), Zone::Hand);

        assert!(can_attack(state.card(ready).unwrap()));
        assert!(!can_attack(state.card(in_hand).unwrap()));

        state.tap(ready);
        assert!(!can_attack(state.card(ready).unwrap()));

        state.untap(ready);
        state.card_mut(ready).unwrap().summoning_sick = true;
        assert!(!can_attack(state.card(ready).unwrap()));
    }

    #[test]
    fn test_possible_defenders_include_planeswalkers() {
        let (_, walker) = defs();
        let mut state = GameState::new(&GameConfig::new(3));
        let theirs = state.create_card(&walker, PlayerId::new(1), Zone::Battlefield);
        state.create_card(&walker, PlayerId::new(2), Zone::Battlefield);

        assert_eq!(
            possible_defenders(PlayerId::new(1), &state),
            vec![EntityId::player(PlayerId::new(1)), theirs]
        );

        state.players[PlayerId::new(1)].leave();
        assert!(possible_defenders(PlayerId::new(1), &state).is_empty());
    }

    #[test]
    fn test_is_legal_defender() {
        let (bear, walker) = defs();
        let mut state = GameState::new(&GameConfig::new(2));
        let own_walker = state.create_card(&walker, PlayerId::new(0), Zone::Battlefield);
        let their_walker = state.create_card(&walker, PlayerId::new(1), Zone::Battlefield);
        let their_bear = state.create_card(&bear, PlayerId::new(1), Zone::Battlefield);
        let p0 = PlayerId::new(0);

        assert!(is_legal_defender(EntityId::player(PlayerId::new(1)), p0, &state));
        assert!(!is_legal_defender(EntityId::player(p0), p0, &state));
        assert!(is_legal_defender(their_walker, p0, &state));
        assert!(!is_legal_defender(own_walker, p0, &state));
        assert!(!is_legal_defender(their_bear, p0, &state));
    }
}
