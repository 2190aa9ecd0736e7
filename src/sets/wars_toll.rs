//! Wars Toll {3}{R}
//! Enchantment
//!
//! Whenever an opponent taps a land for mana, tap all lands that player
//! controls.
//!
//! If a creature an opponent controls attacks, all creatures that opponent
//! controls attack if able.

use tracing::debug;

use crate::abilities::Ability;
use crate::cards::{CardDefinition, CardId, CardType};
use crate::core::EngineResult;
use crate::effects::{Effect, EffectBase, Outcome, SetTargetPointer, TapAllEffect};
use crate::filter::{Filter, FilterContext, Predicate, TargetController};
use crate::rules::Game;
use crate::triggers::{AttacksAllTrigger, TapForManaAllTrigger};

pub const WARS_TOLL: CardId = CardId::new(100);

#[must_use]
pub fn wars_toll() -> CardDefinition {
    let opponent_land = Filter::land_permanent("an opponent taps a land")
        .with(Predicate::Controller(TargetController::Opponent));
    let opponent_creature = Filter::creature_permanent("creature an opponent controls")
        .with(Predicate::Controller(TargetController::Opponent));

    CardDefinition::new(WARS_TOLL, "Wars Toll", [CardType::Enchantment])
        .with_mana_cost("{3}{R}")
        .with_ability(Ability::triggered(
            TapForManaAllTrigger::new(opponent_land.clone(), SetTargetPointer::Player),
            TapAllEffect::new(opponent_land).with_text("tap all lands that player controls"),
        ))
        .with_ability(Ability::triggered(
            AttacksAllTrigger::new(opponent_creature, SetTargetPointer::Permanent),
            WarsTollEffect::new(),
        ))
}

/// "All creatures that opponent controls attack if able."
///
/// The pointer names the attacking creature; "that opponent" is its
/// controller. Each of their creatures that can attack is made to attack
/// this ability's controller or one of their planeswalkers.
#[derive(Clone, Debug)]
pub struct WarsTollEffect {
    base: EffectBase,
}

impl WarsTollEffect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: EffectBase::new(Outcome::Neutral, "all creatures that opponent controls attack if able"),
        }
    }
}

impl Default for WarsTollEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for WarsTollEffect {
    fn base(&self) -> &EffectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EffectBase {
        &mut self.base
    }

    fn apply(&self, game: &mut Game, source: &Ability) -> EngineResult<bool> {
        let Some(attacker) = self.base.target_pointer.first(source, &game.state) else {
            debug!("wars toll: attacking creature left or changed zones");
            return Ok(false);
        };
        let Some(permanent) = game.state.permanent(attacker) else {
            debug!(%attacker, "wars toll: attacking creature is gone");
            return Ok(false);
        };
        let Some(opponent) = game.state.player(permanent.controller).map(|p| p.id) else {
            return Ok(false);
        };

        // Built per resolution: the opponent differs between triggers.
        let theirs = Filter::creature_permanent("creature that opponent controls")
            .with(Predicate::ControllerId(opponent));
        let ctx = FilterContext::of(source);
        for creature in game.state.active_permanents(&theirs, &ctx) {
            game.force_attack(creature, source.controller_id);
        }
        Ok(true)
    }

    fn clone_box(&self) -> Box<dyn Effect> {
        Box::new(self.clone())
    }
}
