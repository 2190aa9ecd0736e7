//! Multiplayer tests.
//!
//! "An opponent" and "that player" must bind the right player when more
//! than two are in the game, and players who have left stop mattering.

use ccg_rules::abilities::AbilityState;
use ccg_rules::core::{EngineError, EntityId, GameConfig, PlayerId, Zone};
use ccg_rules::rules::Game;
use ccg_rules::sets::basics::{forest, grizzly_bears};
use ccg_rules::sets::wars_toll;

fn four_players() -> (Game, Vec<Vec<EntityId>>) {
    let mut game = Game::new(GameConfig::new(4)).unwrap();
    game.create_card(&wars_toll(), PlayerId::new(0), Zone::Battlefield);
    let lands = (0..4)
        .map(|p| {
            (0..2)
                .map(|_| game.create_card(&forest(), PlayerId::new(p), Zone::Battlefield))
                .collect()
        })
        .collect();
    (game, lands)
}

fn tapped(game: &Game, id: EntityId) -> bool {
    game.state.card(id).unwrap().tapped
}

/// Only the player who tapped for mana has their lands tapped.
#[test]
fn test_four_player_tap_binds_that_player() {
    let (mut game, lands) = four_players();

    game.activate_mana_ability(PlayerId::new(2), lands[2][0]).unwrap();
    game.run_stack().unwrap();

    for (player, owned) in lands.iter().enumerate() {
        let expected = player == 2;
        assert!(owned.iter().all(|&id| tapped(&game, id) == expected), "player {player}");
    }
}

/// Each opponent is an opponent; the controller is not.
#[test]
fn test_every_other_player_is_an_opponent() {
    let (mut game, lands) = four_players();

    for p in 1..4 {
        game.activate_mana_ability(PlayerId::new(p), lands[p as usize][0]).unwrap();
        assert_eq!(game.queue.len(), 1, "player {p}");
        game.run_stack().unwrap();
    }
    game.activate_mana_ability(PlayerId::new(0), lands[0][0]).unwrap();
    assert!(game.queue.is_empty());
    assert!(!tapped(&game, lands[0][1]));
}

/// Forced attackers go at the Wars Toll controller, whoever the first
/// attacker chose, and other opponents' creatures stay home.
#[test]
fn test_four_player_forced_attack() {
    let (mut game, _) = four_players();
    let attacker = game.create_card(&grizzly_bears(), PlayerId::new(1), Zone::Battlefield);
    let follower = game.create_card(&grizzly_bears(), PlayerId::new(1), Zone::Battlefield);
    let bystander = game.create_card(&grizzly_bears(), PlayerId::new(3), Zone::Battlefield);

    let target = EntityId::player(PlayerId::new(2));
    assert!(game.declare_attacker(PlayerId::new(1), attacker, target, false));
    game.run_stack().unwrap();

    let attacking = |id| game.state.card(id).unwrap().attacking;
    assert_eq!(attacking(attacker), Some(target));
    assert_eq!(attacking(follower), Some(EntityId::player(PlayerId::new(0))));
    assert_eq!(attacking(bystander), None);
}

/// A player who left can no longer act, and their permanents are no
/// longer active.
#[test]
fn test_departed_player() {
    let (mut game, lands) = four_players();
    game.state.players[PlayerId::new(3)].leave();

    assert_eq!(
        game.activate_mana_ability(PlayerId::new(3), lands[3][0]),
        Err(EngineError::UnknownPlayer(PlayerId::new(3)))
    );

    let lands_in_play = game.state.all_active_permanents(ccg_rules::cards::CardType::Land);
    assert_eq!(lands_in_play.len(), 6);
    assert!(lands[3].iter().all(|id| !lands_in_play.contains(id)));

    // The rest of the table still triggers normally.
    game.activate_mana_ability(PlayerId::new(1), lands[1][0]).unwrap();
    game.run_stack().unwrap();
    assert!(tapped(&game, lands[1][1]));
}

/// Creatures cannot be forced to attack a player who has left.
#[test]
fn test_no_forced_attack_on_departed_player() {
    let (mut game, _) = four_players();
    let bear = game.create_card(&grizzly_bears(), PlayerId::new(1), Zone::Battlefield);
    game.state.players[PlayerId::new(0)].leave();

    assert!(!game.force_attack(bear, PlayerId::new(0)));
    assert_eq!(game.state.card(bear).unwrap().attacking, None);
}

/// The permanents of a player who left no longer trigger.
#[test]
fn test_departed_controller_does_not_trigger() {
    let (mut game, lands) = four_players();
    game.state.players[PlayerId::new(0)].leave();

    game.activate_mana_ability(PlayerId::new(1), lands[1][0]).unwrap();
    assert!(game.queue.is_empty());
    game.run_stack().unwrap();
    assert!(!tapped(&game, lands[1][1]));
}

/// An ability already on the stack fails once its controller has left.
#[test]
fn test_stack_entry_fails_after_controller_leaves() {
    let (mut game, lands) = four_players();
    game.activate_mana_ability(PlayerId::new(2), lands[2][0]).unwrap();
    assert_eq!(game.flush_triggers(), 1);
    game.state.players[PlayerId::new(0)].leave();

    let entry = game.resolve_top().unwrap().unwrap();
    assert_eq!(entry.state, AbilityState::Failed);
    assert!(!tapped(&game, lands[2][1]));
}
