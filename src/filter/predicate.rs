//! Predicate terms for filters.

use serde::{Deserialize, Serialize};

use crate::abilities::Ability;
use crate::cards::{CardInstance, CardType, Subtype};
use crate::core::{EntityId, GameState, PlayerId, Zone};
use crate::mana::ManaColor;

/// Who a relative player predicate is measured from.
///
/// `Opponent` only counts players still in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetController {
    You,
    Opponent,
    NotYou,
    Any,
}

impl TargetController {
    /// Does `player` stand in this relation to `you`?
    #[must_use]
    pub fn matches(self, player: PlayerId, you: PlayerId, state: &GameState) -> bool {
        match self {
            TargetController::You => player == you,
            TargetController::Opponent => state.is_opponent(you, player),
            TargetController::NotYou => player != you,
            TargetController::Any => true,
        }
    }
}

/// Who is asking: the controller and source object of the ability doing the
/// filtering. Relative predicates such as `Controller(You)` and `Another`
/// are measured against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterContext {
    pub controller: PlayerId,
    pub source_id: EntityId,
}

impl FilterContext {
    #[must_use]
    pub const fn new(controller: PlayerId, source_id: EntityId) -> Self {
        Self {
            controller,
            source_id,
        }
    }

    /// Context of an ability: its controller and source object.
    #[must_use]
    pub fn of(ability: &Ability) -> Self {
        Self::new(ability.controller_id, ability.source_id)
    }
}

/// A single test on a game object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    /// Has the card type.
    CardType(CardType),
    /// Has the subtype.
    Subtype(Subtype),
    /// Is (at least) this color.
    Color(ManaColor),
    /// Has no color.
    Colorless,
    /// Controller relative to the asking player.
    Controller(TargetController),
    /// Controlled by a specific player.
    ControllerId(PlayerId),
    /// Owner relative to the asking player.
    Owner(TargetController),
    /// Owned by a specific player.
    OwnerId(PlayerId),
    /// Tapped (`true`) or untapped (`false`).
    Tapped(bool),
    /// Not the source object itself.
    Another,
    /// Is in the zone.
    InZone(Zone),
}

impl Predicate {
    /// Evaluate against an object. Pure: never touches the state.
    #[must_use]
    pub fn matches(&self, object: &CardInstance, ctx: &FilterContext, state: &GameState) -> bool {
        match self {
            Predicate::CardType(card_type) => object.has_type(*card_type),
            Predicate::Subtype(subtype) => object.current.has_subtype(subtype),
            Predicate::Color(color) => object.colors().contains(*color),
            Predicate::Colorless => object.colors().is_colorless(),
            Predicate::Controller(who) => who.matches(object.controller, ctx.controller, state),
            Predicate::ControllerId(player) => object.controller == *player,
            Predicate::Owner(who) => who.matches(object.owner, ctx.controller, state),
            Predicate::OwnerId(player) => object.owner == *player,
            Predicate::Tapped(tapped) => object.tapped == *tapped,
            Predicate::Another => object.id != ctx.source_id,
            Predicate::InZone(zone) => object.zone == *zone,
        }
    }
}
