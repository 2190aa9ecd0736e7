//! Continuous effects from static abilities.
//!
//! `GameState::apply_continuous_effects` rebuilds every object's current
//! characteristics from its printed ones and then applies these effects
//! sorted by layer, then by the source's timestamp.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameState, PlayerId};
use crate::mana::ColorSet;

/// Application order for continuous effects, earliest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    Copy,
    Control,
    Text,
    Type,
    Color,
    Ability,
    PowerToughness,
}

/// When a static ability's effect applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    /// Only while the source is on the battlefield.
    #[default]
    WhileOnBattlefield,
    /// In every zone. Used by characteristic-defining abilities.
    Always,
}

/// An effect that continuously modifies the game while its ability is active.
pub trait ContinuousEffect: std::fmt::Debug + Send + Sync {
    fn layer(&self) -> Layer;

    fn duration(&self) -> Duration {
        Duration::WhileOnBattlefield
    }

    fn text(&self) -> &str;

    /// Modify `state` on behalf of the static ability of `source_id`.
    fn apply(&self, source_id: EntityId, controller: PlayerId, state: &mut GameState);

    fn clone_box(&self) -> Box<dyn ContinuousEffect>;
}

impl Clone for Box<dyn ContinuousEffect> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Devoid: "This card has no color."
#[derive(Clone, Debug, Default)]
pub struct BecomesColorlessSourceEffect;

impl ContinuousEffect for BecomesColorlessSourceEffect {
    fn layer(&self) -> Layer {
        Layer::Color
    }

    fn duration(&self) -> Duration {
        Duration::Always
    }

    fn text(&self) -> &str {
        "this card has no color"
    }

    fn apply(&self, source_id: EntityId, _controller: PlayerId, state: &mut GameState) {
        if let Some(card) = state.card_mut(source_id) {
            card.current.colors = ColorSet::COLORLESS;
        }
    }

    fn clone_box(&self) -> Box<dyn ContinuousEffect> {
        Box::new(self.clone())
    }
}
