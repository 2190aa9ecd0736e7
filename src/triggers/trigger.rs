//! Trigger conditions of triggered abilities.
//!
//! A `Trigger` says which event type it listens for, whether a given event
//! of that type qualifies, and what to record in the effects' target
//! pointers when it does.

use super::event::{EventType, GameEvent};
use crate::abilities::Ability;
use crate::core::{EntityId, GameState};
use crate::effects::{SetTargetPointer, TargetPointer};
use crate::filter::{Filter, FilterContext};

/// The trigger condition of a triggered ability.
pub trait Trigger: std::fmt::Debug + Send + Sync {
    /// The only event type this trigger can fire on.
    fn event_type(&self) -> EventType;

    /// Does `event` fire `ability`? Must not mutate anything.
    fn check(&self, event: &GameEvent, ability: &Ability, state: &GameState) -> bool;

    /// Target pointer to record in the ability's effects, or `None` to
    /// leave them reading the ability's chosen targets.
    fn bind(&self, event: &GameEvent, state: &GameState) -> Option<TargetPointer>;

    /// Rules text of the condition, e.g. "Whenever an opponent taps a land for mana".
    fn text(&self) -> String;

    fn clone_box(&self) -> Box<dyn Trigger>;
}

impl Clone for Box<dyn Trigger> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Shared check for the "whenever a permanent matching F does X" triggers.
fn subject_matches(filter: &Filter, event: &GameEvent, ability: &Ability, state: &GameState) -> bool {
    state
        .card(event.target_id)
        .is_some_and(|subject| filter.matches(subject, &FilterContext::of(ability), state))
}

/// Shared binding for SetTargetPointer policies.
fn bind_subject(policy: SetTargetPointer, event: &GameEvent, state: &GameState) -> Option<TargetPointer> {
    match policy {
        SetTargetPointer::None => None,
        SetTargetPointer::Permanent => Some(TargetPointer::object(event.target_id, state)),
        SetTargetPointer::Player => {
            let controller = state
                .card(event.target_id)
                .map(|subject| subject.controller)
                .or(event.player_id)?;
            Some(TargetPointer::fixed(EntityId::player(controller)))
        }
    }
}

/// "Whenever [a permanent matching filter] is tapped for mana".
#[derive(Clone, Debug)]
pub struct TapForManaAllTrigger {
    pub filter: Filter,
    pub set_target_pointer: SetTargetPointer,
}

impl TapForManaAllTrigger {
    #[must_use]
    pub fn new(filter: Filter, set_target_pointer: SetTargetPointer) -> Self {
        Self {
            filter,
            set_target_pointer,
        }
    }
}

impl Trigger for TapForManaAllTrigger {
    fn event_type(&self) -> EventType {
        EventType::TappedForMana
    }

    fn check(&self, event: &GameEvent, ability: &Ability, state: &GameState) -> bool {
        subject_matches(&self.filter, event, ability, state)
    }

    fn bind(&self, event: &GameEvent, state: &GameState) -> Option<TargetPointer> {
        bind_subject(self.set_target_pointer, event, state)
    }

    fn text(&self) -> String {
        format!("Whenever {} for mana", self.filter.message())
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}

/// "Whenever [a creature matching filter] attacks".
#[derive(Clone, Debug)]
pub struct AttacksAllTrigger {
    pub filter: Filter,
    pub set_target_pointer: SetTargetPointer,
}

impl AttacksAllTrigger {
    #[must_use]
    pub fn new(filter: Filter, set_target_pointer: SetTargetPointer) -> Self {
        Self {
            filter,
            set_target_pointer,
        }
    }
}

impl Trigger for AttacksAllTrigger {
    fn event_type(&self) -> EventType {
        EventType::AttackerDeclared
    }

    fn check(&self, event: &GameEvent, ability: &Ability, state: &GameState) -> bool {
        subject_matches(&self.filter, event, ability, state)
    }

    fn bind(&self, event: &GameEvent, state: &GameState) -> Option<TargetPointer> {
        bind_subject(self.set_target_pointer, event, state)
    }

    fn text(&self) -> String {
        format!("Whenever a {} attacks", self.filter.message())
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}

/// "When this enters the battlefield".
#[derive(Clone, Debug, Default)]
pub struct EntersBattlefieldTrigger;

impl Trigger for EntersBattlefieldTrigger {
    fn event_type(&self) -> EventType {
        EventType::EnteredBattlefield
    }

    fn check(&self, event: &GameEvent, ability: &Ability, _state: &GameState) -> bool {
        event.target_id == ability.source_id
    }

    fn bind(&self, _event: &GameEvent, _state: &GameState) -> Option<TargetPointer> {
        None
    }

    fn text(&self) -> String {
        "When this enters the battlefield".to_string()
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}
