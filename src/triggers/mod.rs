//! Trigger system for event-driven abilities.
//!
//! ## Key Components
//!
//! - [`EventType`] / [`GameEvent`]: what happened
//! - [`Trigger`]: the condition half of a triggered ability, with
//!   [`TapForManaAllTrigger`], [`AttacksAllTrigger`] and
//!   [`EntersBattlefieldTrigger`]
//! - [`TriggerRegistry`]: index of the triggered abilities on the battlefield
//!
//! ## Flow
//!
//! An event is fired, the registry finds every registered ability whose
//! trigger matches, and each match becomes a [`TriggeredAbility`]: a copy
//! of the ability with its target pointers bound from the event. The game
//! queues those copies and later puts them on the stack.
//!
//! Abilities triggered by the same event come back in a stable order
//! (source timestamp, then source id, then ability id), so two copies of a game trigger
//! identically.

mod event;
mod registry;
mod trigger;

pub use event::{EventType, GameEvent};
pub use registry::{TriggerRegistry, TriggeredAbility};
pub use trigger::{AttacksAllTrigger, EntersBattlefieldTrigger, TapForManaAllTrigger, Trigger};
