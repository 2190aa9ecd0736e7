//! Abilities: what card objects can do.
//!
//! An `Ability` ties a kind (triggered, static, mana) to its effects and
//! targets. Card definitions own unbound templates; every `CardInstance`
//! owns bound deep copies; every trip to the stack is another copy.
//!
//! ## Lifecycle
//!
//! A triggered ability occurrence moves through `AbilityState`:
//! `Idle` -> `Triggered` (queued with its target pointer bound) ->
//! `Resolving` -> `Resolved` or `Failed`. The state belongs to the stack
//! entry, not to the object's ability, so the next qualifying event starts
//! again from `Idle`.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};
use crate::effects::{ContinuousEffect, Effect, Outcome, Target, TargetPointer};
use crate::filter::FilterContext;
use crate::mana::ManaColor;
use crate::triggers::Trigger;

/// Index of an ability on its card, in printed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbilityId(pub u32);

impl AbilityId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// Per-occurrence state of a triggered ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityState {
    #[default]
    Idle,
    Triggered,
    Resolving,
    Resolved,
    /// Declined, impossible, or fizzled. A normal game outcome.
    Failed,
}

/// What kind of ability this is.
#[derive(Clone, Debug)]
pub enum AbilityKind {
    /// "When/Whenever ..., do ..." Optional abilities ask their controller
    /// before resolving ("you may").
    Triggered {
        trigger: Box<dyn Trigger>,
        optional: bool,
    },
    /// Continuous effects that apply while the ability is active.
    Static {
        effects: Vec<Box<dyn ContinuousEffect>>,
    },
    /// "{T}: Add one mana."
    Mana { produces: ManaColor },
}

/// An ability of a card object.
///
/// Cloning an ability deep-copies its trigger, effects and targets.
#[derive(Clone, Debug)]
pub struct Ability {
    pub id: AbilityId,
    pub source_id: EntityId,
    pub controller_id: PlayerId,
    pub kind: AbilityKind,
    /// One-shot effects, applied in order on resolution.
    pub effects: Vec<Box<dyn Effect>>,
    /// Targets chosen when the ability is put on the stack.
    pub targets: Vec<Target>,
}

impl Ability {
    fn template(kind: AbilityKind) -> Self {
        Self {
            id: AbilityId::new(0),
            source_id: EntityId::UNBOUND,
            controller_id: PlayerId::new(0),
            kind,
            effects: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Triggered ability with one effect.
    #[must_use]
    pub fn triggered(trigger: impl Trigger + 'static, effect: impl Effect + 'static) -> Self {
        Self::template(AbilityKind::Triggered {
            trigger: Box::new(trigger),
            optional: false,
        })
        .with_effect(effect)
    }

    /// "You may" triggered ability with one effect.
    #[must_use]
    pub fn optional_triggered(trigger: impl Trigger + 'static, effect: impl Effect + 'static) -> Self {
        Self::template(AbilityKind::Triggered {
            trigger: Box::new(trigger),
            optional: true,
        })
        .with_effect(effect)
    }

    /// Static ability with one continuous effect.
    #[must_use]
    pub fn static_ability(effect: impl ContinuousEffect + 'static) -> Self {
        Self::template(AbilityKind::Static {
            effects: vec![Box::new(effect)],
        })
    }

    /// "{T}: Add {C}" for a kind of mana.
    #[must_use]
    pub fn mana(produces: ManaColor) -> Self {
        Self::template(AbilityKind::Mana { produces })
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: impl Effect + 'static) -> Self {
        self.effects.push(Box::new(effect));
        self
    }

    /// Add a target (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Attach this ability to a game object.
    pub fn bind(&mut self, source_id: EntityId, controller_id: PlayerId) {
        self.source_id = source_id;
        self.controller_id = controller_id;
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        matches!(self.kind, AbilityKind::Triggered { .. })
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, AbilityKind::Triggered { optional: true, .. })
    }

    #[must_use]
    pub fn trigger(&self) -> Option<&dyn Trigger> {
        match &self.kind {
            AbilityKind::Triggered { trigger, .. } => Some(trigger.as_ref()),
            _ => None,
        }
    }

    /// Outcome of the first effect; what deciders are told when choosing
    /// this ability's targets.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.effects.first().map_or(Outcome::Neutral, |e| e.outcome())
    }

    /// Record the same pointer in every effect.
    pub fn set_target_pointer(&mut self, pointer: TargetPointer) {
        for effect in &mut self.effects {
            effect.set_target_pointer(pointer.clone());
        }
    }

    #[must_use]
    pub fn filter_context(&self) -> FilterContext {
        FilterContext::of(self)
    }

    /// Rules text.
    #[must_use]
    pub fn text(&self) -> String {
        let effects: Vec<&str> = self.effects.iter().map(|e| e.text()).collect();
        let body = effects.join(". ");
        match &self.kind {
            AbilityKind::Triggered { trigger, optional } => {
                let may = if *optional { "you may " } else { "" };
                format!("{}, {may}{body}.", trigger.text())
            }
            AbilityKind::Static { effects } => {
                let texts: Vec<&str> = effects.iter().map(|e| e.text()).collect();
                texts.join(". ")
            }
            AbilityKind::Mana { produces } => format!("{{T}}: Add {produces}."),
        }
    }
}
