//! Murk Strider {3}{U}
//! Creature: Eldrazi Processor 3/2
//!
//! Devoid
//!
//! When Murk Strider enters the battlefield, you may put a card an opponent
//! owns from exile into that player's graveyard. If you do, return target
//! creature to its owner's hand.

use tracing::debug;

use crate::abilities::Ability;
use crate::cards::{CardDefinition, CardId, CardType};
use crate::core::{EngineResult, Zone};
use crate::effects::{
    BecomesColorlessSourceEffect, Effect, EffectBase, Outcome, ReturnToHandTargetEffect, Target,
};
use crate::filter::{Filter, FilterContext, Predicate, TargetController};
use crate::rules::Game;
use crate::triggers::EntersBattlefieldTrigger;

pub const MURK_STRIDER: CardId = CardId::new(101);

#[must_use]
pub fn murk_strider() -> CardDefinition {
    CardDefinition::new(MURK_STRIDER, "Murk Strider", [CardType::Creature])
        .with_mana_cost("{3}{U}")
        .with_subtypes(["Eldrazi", "Processor"])
        .with_power_toughness(3, 2)
        .with_ability(Ability::static_ability(BecomesColorlessSourceEffect))
        .with_ability(
            Ability::optional_triggered(EntersBattlefieldTrigger, MurkStriderEffect::new())
                .with_target(Target::creature()),
        )
}

/// Process a card an opponent owns from exile; if you do, bounce the
/// ability's target creature.
#[derive(Clone, Debug)]
pub struct MurkStriderEffect {
    base: EffectBase,
}

impl MurkStriderEffect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: EffectBase::new(
                Outcome::Discard,
                "put a card an opponent owns from exile into that player's graveyard. \
                 If you do, return target creature to its owner's hand",
            ),
        }
    }
}

impl Default for MurkStriderEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for MurkStriderEffect {
    fn base(&self) -> &EffectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EffectBase {
        &mut self.base
    }

    fn apply(&self, game: &mut Game, source: &Ability) -> EngineResult<bool> {
        let Some(controller) = game.state.player(source.controller_id).map(|p| p.id) else {
            return Ok(false);
        };

        let mut exiled = Target::card_in_exile(
            1,
            1,
            Filter::card("card an opponent owns from exile").with(Predicate::Owner(TargetController::Opponent)),
        );
        if !exiled.can_choose(&FilterContext::of(source), &game.state)
            || !game.choose_target(controller, self.outcome(), &mut exiled, source)
        {
            return Ok(true);
        }

        for &card in exiled.chosen() {
            game.move_card(card, Zone::Graveyard)?;
            debug!(%card, "processed from exile");
        }
        ReturnToHandTargetEffect::new().apply(game, source)
    }

    fn clone_box(&self) -> Box<dyn Effect> {
        Box::new(self.clone())
    }
}
