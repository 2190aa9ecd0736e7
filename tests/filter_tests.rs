//! Filter property tests.
//!
//! Random boards and random predicate lists: a filter is the AND of its
//! predicates, and a cloned filter behaves exactly like its original even
//! after the clone is changed.

use proptest::prelude::*;

use ccg_rules::cards::{CardType, Subtype};
use ccg_rules::core::{EntityId, GameConfig, GameState, PlayerId, Zone};
use ccg_rules::filter::{Filter, FilterContext, Predicate, TargetController};
use ccg_rules::mana::ManaColor;
use ccg_rules::sets::basics::{forest, grizzly_bears, hill_giant, mountain};
use ccg_rules::sets::{murk_strider, wars_toll};

const ZONES: [Zone; 4] = [Zone::Battlefield, Zone::Hand, Zone::Graveyard, Zone::Exile];

fn build_board(cards: &[(u8, u8, bool, usize)]) -> (GameState, Vec<EntityId>) {
    let mut state = GameState::new(&GameConfig::new(3));
    let defs = [forest(), mountain(), grizzly_bears(), hill_giant(), wars_toll(), murk_strider()];
    let ids = cards
        .iter()
        .map(|&(kind, owner, tapped, zone)| {
            let id = state.create_card(&defs[kind as usize % defs.len()], PlayerId::new(owner), ZONES[zone]);
            if tapped {
                state.tap(id);
            }
            id
        })
        .collect();
    (state, ids)
}

fn controller() -> impl Strategy<Value = TargetController> {
    prop_oneof![
        Just(TargetController::You),
        Just(TargetController::Opponent),
        Just(TargetController::NotYou),
        Just(TargetController::Any),
    ]
}

fn predicate() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        prop_oneof![
            Just(CardType::Creature),
            Just(CardType::Land),
            Just(CardType::Enchantment)
        ]
        .prop_map(Predicate::CardType),
        Just(Predicate::Subtype(Subtype::new("Bear"))),
        prop_oneof![Just(ManaColor::Red), Just(ManaColor::Green), Just(ManaColor::Blue)].prop_map(Predicate::Color),
        Just(Predicate::Colorless),
        controller().prop_map(Predicate::Controller),
        (0u8..3).prop_map(|p| Predicate::ControllerId(PlayerId::new(p))),
        controller().prop_map(Predicate::Owner),
        (0u8..3).prop_map(|p| Predicate::OwnerId(PlayerId::new(p))),
        any::<bool>().prop_map(Predicate::Tapped),
        Just(Predicate::Another),
        prop_oneof![Just(Zone::Battlefield), Just(Zone::Exile)].prop_map(Predicate::InZone),
    ]
}

fn filter() -> impl Strategy<Value = Filter> {
    (any::<bool>(), prop::collection::vec(predicate(), 0..4)).prop_map(|(permanent, predicates)| {
        let mut filter = if permanent {
            Filter::permanent("test permanents")
        } else {
            Filter::card("test cards")
        };
        for p in predicates {
            filter.add(p);
        }
        filter
    })
}

fn board() -> impl Strategy<Value = Vec<(u8, u8, bool, usize)>> {
    prop::collection::vec((0u8..6, 0u8..3, any::<bool>(), 0usize..ZONES.len()), 1..12)
}

fn matching(filter: &Filter, ctx: &FilterContext, state: &GameState, ids: &[EntityId]) -> Vec<EntityId> {
    ids.iter()
        .copied()
        .filter(|&id| filter.matches(state.card(id).unwrap(), ctx, state))
        .collect()
}

proptest! {
    /// Property: a clone selects exactly what the original selects.
    #[test]
    fn prop_clone_matches_like_original(cards in board(), filter in filter(), you in 0u8..3) {
        let (state, ids) = build_board(&cards);
        let ctx = FilterContext::new(PlayerId::new(you), ids[0]);

        let copy = filter.clone();
        prop_assert_eq!(&copy, &filter);
        prop_assert_eq!(
            matching(&copy, &ctx, &state, &ids),
            matching(&filter, &ctx, &state, &ids)
        );
    }

    /// Property: changing a clone never changes the original.
    #[test]
    fn prop_clone_is_independent(cards in board(), filter in filter(), extra in predicate()) {
        let (state, ids) = build_board(&cards);
        let ctx = FilterContext::new(PlayerId::new(0), ids[0]);
        let before = matching(&filter, &ctx, &state, &ids);
        let len = filter.predicates().len();

        let mut copy = filter.clone();
        copy.add(extra);
        copy.set_message("changed");

        prop_assert_eq!(filter.predicates().len(), len);
        prop_assert_ne!(filter.message(), "changed");
        prop_assert_eq!(matching(&filter, &ctx, &state, &ids), before);
    }

    /// Property: a filter matches exactly when each predicate does.
    #[test]
    fn prop_filter_is_conjunction(cards in board(), filter in filter(), you in 0u8..3) {
        let (state, ids) = build_board(&cards);
        let ctx = FilterContext::new(PlayerId::new(you), ids[0]);

        for &id in &ids {
            let card = state.card(id).unwrap();
            let in_domain = filter.domain() == ccg_rules::filter::FilterDomain::Card
                || card.zone == Zone::Battlefield;
            let every = filter.predicates().iter().all(|p| p.matches(card, &ctx, &state));
            prop_assert_eq!(filter.matches(card, &ctx, &state), in_domain && every);
        }
    }

    /// Property: adding a predicate can only narrow the selection.
    #[test]
    fn prop_adding_predicate_narrows(cards in board(), filter in filter(), extra in predicate()) {
        let (state, ids) = build_board(&cards);
        let ctx = FilterContext::new(PlayerId::new(1), ids[0]);

        let wide = matching(&filter, &ctx, &state, &ids);
        let narrow = matching(&filter.clone().with(extra), &ctx, &state, &ids);
        prop_assert!(narrow.iter().all(|id| wide.contains(id)));
    }
}

/// Active permanents drop objects of players who left the game.
#[test]
fn test_active_permanents_skip_departed_players() {
    let (mut state, ids) = build_board(&[(2, 0, false, 0), (2, 1, false, 0), (2, 2, false, 0)]);
    let creatures = Filter::creature_permanent("creatures");
    let ctx = FilterContext::new(PlayerId::new(0), ids[0]);

    assert_eq!(state.active_permanents(&creatures, &ctx), ids);

    state.players[PlayerId::new(2)].leave();
    assert_eq!(state.active_permanents(&creatures, &ctx), ids[..2].to_vec());
}

/// "Opponent" is relative to the ability's controller.
#[test]
fn test_opponent_is_relative_to_controller() {
    let (state, ids) = build_board(&[(0, 0, false, 0), (0, 1, false, 0), (0, 2, false, 0)]);
    let lands = Filter::land_permanent("an opponent's land").with(Predicate::Controller(TargetController::Opponent));

    let from_0 = FilterContext::new(PlayerId::new(0), EntityId::UNBOUND);
    let from_1 = FilterContext::new(PlayerId::new(1), EntityId::UNBOUND);

    assert_eq!(state.active_permanents(&lands, &from_0), vec![ids[1], ids[2]]);
    assert_eq!(state.active_permanents(&lands, &from_1), vec![ids[0], ids[2]]);
}
