//! Murk Strider integration tests.
//!
//! The enters-the-battlefield ability is optional, targets a creature when
//! it triggers, and only bounces that creature if a card an opponent owns
//! was processed from exile.

use ccg_rules::abilities::AbilityState;
use ccg_rules::core::{EntityId, GameConfig, PlayerId, Zone};
use ccg_rules::rules::{Game, ScriptedDecider};
use ccg_rules::sets::basics::{grizzly_bears, hill_giant};
use ccg_rules::sets::murk_strider;
use ccg_rules::stack::ResolutionStatus;

const YOU: PlayerId = PlayerId(0);
const OPPONENT: PlayerId = PlayerId(1);

struct Board {
    game: Game,
    strider: EntityId,
    bear: EntityId,
    exiled: EntityId,
}

/// Murk Strider in your hand, an opposing bear on the battlefield and an
/// opposing giant in exile.
fn setup() -> Board {
    let mut game = Game::new(GameConfig::new(2)).unwrap();
    let strider = game.create_card(&murk_strider(), YOU, Zone::Hand);
    let bear = game.create_card(&grizzly_bears(), OPPONENT, Zone::Battlefield);
    let exiled = game.create_card(&hill_giant(), OPPONENT, Zone::Exile);
    Board { game, strider, bear, exiled }
}

fn zone(game: &Game, id: EntityId) -> Zone {
    game.state.card(id).unwrap().zone
}

/// Accepting processes the exiled card and bounces the target.
#[test]
fn test_accept_processes_and_bounces() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(
        YOU,
        ScriptedDecider::new()
            .with_targets([bear])
            .with_use(true)
            .with_targets([exiled]),
    )
    .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    assert_eq!(game.queue.len(), 1);
    game.flush_triggers();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Resolved);
    assert_eq!(zone(&game, exiled), Zone::Graveyard);
    assert_eq!(
        game.state.cards_in_zone(Zone::Graveyard),
        vec![exiled],
        "processed card goes to its owner's graveyard"
    );
    assert_eq!(zone(&game, bear), Zone::Hand);
    assert_eq!(zone(&game, strider), Zone::Battlefield);
}

/// The default decider says yes and targets an opposing creature.
#[test]
fn test_auto_decider_bounces_opposing_creature() {
    let Board { mut game, strider, bear, exiled } = setup();

    game.put_onto_battlefield(strider, YOU).unwrap();
    assert_eq!(game.run_stack().unwrap(), ResolutionStatus::Complete);

    assert_eq!(zone(&game, exiled), Zone::Graveyard);
    assert_eq!(zone(&game, bear), Zone::Hand);
}

/// Declining the "you may" leaves everything where it was.
#[test]
fn test_decline_does_nothing() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(YOU, ScriptedDecider::new().with_targets([bear]).with_use(false))
        .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    game.flush_triggers();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Resolved);
    assert_eq!(zone(&game, exiled), Zone::Exile);
    assert_eq!(zone(&game, bear), Zone::Battlefield);
}

/// With no opposing card in exile nothing is processed and nothing returns,
/// but the ability still resolves.
#[test]
fn test_no_card_in_exile() {
    let mut game = Game::new(GameConfig::new(2)).unwrap();
    let strider = game.create_card(&murk_strider(), YOU, Zone::Hand);
    let bear = game.create_card(&grizzly_bears(), OPPONENT, Zone::Battlefield);
    // Your own exiled cards do not count.
    let mine = game.create_card(&hill_giant(), YOU, Zone::Exile);

    game.put_onto_battlefield(strider, YOU).unwrap();
    game.flush_triggers();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Resolved);
    assert_eq!(zone(&game, bear), Zone::Battlefield);
    assert_eq!(zone(&game, mine), Zone::Exile);
}

/// Choosing no exiled card is the same as not processing.
#[test]
fn test_declining_exile_choice() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(
        YOU,
        ScriptedDecider::new()
            .with_targets([bear])
            .with_use(true)
            .with_targets(Vec::new()),
    )
    .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    game.run_stack().unwrap();

    assert_eq!(zone(&game, exiled), Zone::Exile);
    assert_eq!(zone(&game, bear), Zone::Battlefield);
}

/// If the target left before resolution the ability fizzles and the
/// exiled card stays.
#[test]
fn test_fizzles_when_target_leaves() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(YOU, ScriptedDecider::new().with_targets([bear]))
        .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    game.flush_triggers();
    game.move_card(bear, Zone::Graveyard).unwrap();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Failed);
    assert_eq!(zone(&game, exiled), Zone::Exile);
}

/// A target that left and came back before resolution is a new object, so
/// the ability fizzles and the creature stays where it is.
#[test]
fn test_fizzles_when_target_returns() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(YOU, ScriptedDecider::new().with_targets([bear]))
        .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    game.flush_triggers();
    game.move_card(bear, Zone::Hand).unwrap();
    game.move_card(bear, Zone::Battlefield).unwrap();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Failed);
    assert_eq!(zone(&game, bear), Zone::Battlefield);
    assert_eq!(zone(&game, exiled), Zone::Exile);
}

/// If the controller leaves while the ability is on the stack it fails
/// without asking "you may".
#[test]
fn test_fails_when_controller_leaves() {
    let Board { mut game, strider, bear, exiled } = setup();
    game.set_decider(YOU, ScriptedDecider::new().with_targets([bear]).with_use(true))
        .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    assert_eq!(game.flush_triggers(), 1);
    game.state.players[YOU].leave();
    let entry = game.resolve_top().unwrap().unwrap();

    assert_eq!(entry.state, AbilityState::Failed);
    assert_eq!(zone(&game, bear), Zone::Battlefield);
    assert_eq!(zone(&game, exiled), Zone::Exile);
}

/// If no target is chosen the trigger never reaches the stack.
#[test]
fn test_no_legal_target_removes_trigger() {
    let mut game = Game::new(GameConfig::new(2)).unwrap();
    let strider = game.create_card(&murk_strider(), YOU, Zone::Hand);
    game.create_card(&hill_giant(), OPPONENT, Zone::Exile);
    game.set_decider(YOU, ScriptedDecider::new().with_targets(Vec::new()))
        .unwrap();

    game.put_onto_battlefield(strider, YOU).unwrap();
    assert_eq!(game.flush_triggers(), 0);
    assert!(game.stack.is_empty());
}

/// Devoid: colorless in every zone, though its cost is blue.
#[test]
fn test_devoid_in_every_zone() {
    let Board { mut game, strider, .. } = setup();

    for to in [Zone::Hand, Zone::Battlefield, Zone::Graveyard, Zone::Exile, Zone::Library] {
        game.move_card(strider, to).unwrap();
        let card = game.state.card(strider).unwrap();
        assert!(card.colors().is_colorless(), "colored in {to}");
        assert_eq!(card.printed.mana_cost.to_string(), "{3}{U}");
    }
}

/// The effect fails when its controller has left the game.
#[test]
fn test_effect_fails_without_controller() {
    let Board { mut game, strider, bear, .. } = setup();
    game.move_card(strider, Zone::Battlefield).unwrap();

    let mut ability = game.state.card(strider).unwrap().abilities[1].clone();
    let ctx = ability.filter_context();
    ability.targets[0].add_target(bear, &ctx, &game.state);
    let effect = ability.effects[0].clone();
    game.state.players[YOU].leave();

    assert!(!effect.apply(&mut game, &ability).unwrap());
    assert_eq!(zone(&game, bear), Zone::Battlefield);
}
