//! The one-shot effect contract.
//!
//! An effect is the unit of game-state mutation. Concrete effects are
//! separate types behind the `Effect` trait rather than one closed enum,
//! since card content keeps adding new kinds.

use serde::{Deserialize, Serialize};

use super::targeting::TargetPointer;
use crate::abilities::Ability;
use crate::core::EngineResult;
use crate::rules::Game;

/// What an effect is trying to do, from the point of view of whoever it
/// affects. Deciders use it to guess which targets to pick; resolution
/// never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Neutral,
    Benefit,
    Detriment,
    Tap,
    Untap,
    Discard,
    ReturnToHand,
    Exile,
    AddMana,
    PutCreatureInPlay,
}

impl Outcome {
    /// Is this good for the affected object or player?
    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(
            self,
            Outcome::Neutral
                | Outcome::Benefit
                | Outcome::Untap
                | Outcome::AddMana
                | Outcome::PutCreatureInPlay
        )
    }
}

/// Data every effect carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBase {
    pub outcome: Outcome,
    pub text: String,
    pub target_pointer: TargetPointer,
}

impl EffectBase {
    #[must_use]
    pub fn new(outcome: Outcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            text: text.into(),
            target_pointer: TargetPointer::default(),
        }
    }
}

/// A one-shot effect.
///
/// `apply` is the only entry point that mutates the game. It returns
/// `Ok(false)` when the effect could not happen (a referenced object or
/// player is gone, an optional premise was declined) and `Ok(true)`
/// otherwise, including when it legitimately affected nothing. `Err` is
/// reserved for engine-contract violations.
pub trait Effect: std::fmt::Debug + Send + Sync {
    fn base(&self) -> &EffectBase;

    fn base_mut(&mut self) -> &mut EffectBase;

    /// Apply the effect on behalf of `source`.
    fn apply(&self, game: &mut Game, source: &Ability) -> EngineResult<bool>;

    /// Independent copy of this effect. Must share no target state with `self`.
    fn clone_box(&self) -> Box<dyn Effect>;

    fn outcome(&self) -> Outcome {
        self.base().outcome
    }

    fn text(&self) -> &str {
        &self.base().text
    }

    fn target_pointer(&self) -> &TargetPointer {
        &self.base().target_pointer
    }

    fn set_target_pointer(&mut self, pointer: TargetPointer) {
        self.base_mut().target_pointer = pointer;
    }
}

impl Clone for Box<dyn Effect> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_good() {
        assert!(Outcome::Neutral.is_good());
        assert!(Outcome::Benefit.is_good());
        assert!(!Outcome::Tap.is_good());
        assert!(!Outcome::Discard.is_good());
        assert!(!Outcome::ReturnToHand.is_good());
    }

    #[test]
    fn test_effect_base_defaults_to_first_target() {
        let base = EffectBase::new(Outcome::Tap, "tap all lands");
        assert_eq!(base.target_pointer, TargetPointer::FirstTarget);
        assert_eq!(base.text, "tap all lands");
    }
}
