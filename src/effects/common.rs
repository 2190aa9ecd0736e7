//! Reusable one-shot effects.

use tracing::{debug, warn};

use super::effect::{Effect, EffectBase, Outcome};
use crate::abilities::Ability;
use crate::core::{EngineResult, Zone};
use crate::filter::{Filter, FilterContext};
use crate::rules::Game;

/// Tap every permanent matching `filter` whose controller is the player the
/// target pointer names ("tap all lands that player controls").
///
/// Tapping is idempotent, so already tapped permanents are not skipped.
/// Always succeeds, even when nothing matches.
#[derive(Clone, Debug)]
pub struct TapAllEffect {
    base: EffectBase,
    filter: Filter,
}

impl TapAllEffect {
    #[must_use]
    pub fn new(filter: Filter) -> Self {
        let text = format!("tap all {}", filter.message());
        Self {
            base: EffectBase::new(Outcome::Tap, text),
            filter,
        }
    }

    /// Replace the generated text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.base.text = text.into();
        self
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl Effect for TapAllEffect {
    fn base(&self) -> &EffectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EffectBase {
        &mut self.base
    }

    fn apply(&self, game: &mut Game, source: &Ability) -> EngineResult<bool> {
        let player_count = game.state.player_count();
        let bound = self
            .base
            .target_pointer
            .first(source, &game.state)
            .and_then(|id| id.as_player(player_count));

        let ctx = FilterContext::of(source);
        for id in game.state.active_permanents(&self.filter, &ctx) {
            let controlled = game.state.card(id).map(|p| p.controller);
            if bound.is_some() && controlled == bound {
                game.state.tap(id);
            }
        }
        Ok(true)
    }

    fn clone_box(&self) -> Box<dyn Effect> {
        Box::new(self.clone())
    }
}

/// Return the targeted permanents to their owners' hands.
///
/// Succeeds if at least one permanent was returned.
#[derive(Clone, Debug)]
pub struct ReturnToHandTargetEffect {
    base: EffectBase,
}

impl ReturnToHandTargetEffect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: EffectBase::new(Outcome::ReturnToHand, "return target creature to its owner's hand"),
        }
    }
}

impl Default for ReturnToHandTargetEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for ReturnToHandTargetEffect {
    fn base(&self) -> &EffectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EffectBase {
        &mut self.base
    }

    fn apply(&self, game: &mut Game, source: &Ability) -> EngineResult<bool> {
        let mut returned = false;
        for id in self.base.target_pointer.targets(source, &game.state) {
            if game.state.permanent(id).is_none() {
                warn!(target = %id, "return to hand: target is no longer on the battlefield");
                continue;
            }
            game.move_card(id, Zone::Hand)?;
            debug!(target = %id, "returned to owner's hand");
            returned = true;
        }
        Ok(returned)
    }

    fn clone_box(&self) -> Box<dyn Effect> {
        Box::new(self.clone())
    }
}
