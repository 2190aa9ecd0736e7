//! # ccg-rules
//!
//! A declarative trigger/effect framework for a turn-based multiplayer
//! card game.
//!
//! ## Design Principles
//!
//! 1. **Cards are data plus small effect types**: a card definition wires
//!    triggers, filters and effects together; it never reaches into the
//!    engine's resolution loop.
//!
//! 2. **Copy on instantiate**: every game object owns deep copies of its
//!    definition's abilities, and every trip to the stack is another copy.
//!    No target state is ever shared between objects or between games.
//!
//! 3. **N-Player First**: opponents are "every other player still in the
//!    game"; nothing assumes two players.
//!
//! 4. **Declining is not an error**: `Effect::apply` returns `Ok(false)`
//!    for impossible or declined effects. `EngineError` is reserved for
//!    callers that break the engine's contract.
//!
//! ## Architecture
//!
//! - **Events drive triggers**: state changes emit `GameEvent`s; the
//!   `TriggerRegistry` turns matching events into bound ability copies.
//!
//! - **Persistent history**: the event log is an `im::Vector`, so copying a
//!   game for a simulation is cheap.
//!
//! - **Independent simulations**: `Game::copy` forks the RNG and clones
//!   every decider; copies can run on other threads.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, state, RNG, configuration, errors
//! - `zones`: Card locations
//! - `mana`: Colors, costs, pools, the mana pie chart
//! - `cards`: Card definitions and instances
//! - `filter`: Predicate bundles selecting game objects
//! - `effects`: One-shot and continuous effects, targets and target pointers
//! - `triggers`: Events, trigger conditions and the trigger registry
//! - `abilities`: Triggered, static and mana abilities
//! - `stack`: Trigger queue and priority stack
//! - `rules`: The `Game` facade, player decisions and combat
//! - `sets`: Card content

pub mod core;
pub mod zones;
pub mod mana;
pub mod cards;
pub mod filter;
pub mod effects;
pub mod triggers;
pub mod abilities;
pub mod stack;
pub mod rules;
pub mod sets;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult,
    EntityId, PlayerId, PlayerMap, Player,
    GameRng,
    GameConfig, Zone,
    GameState, PublicSnapshot, PermanentSummary,
};

pub use crate::zones::{ZoneKey, ZoneManager};

pub use crate::mana::{ColorSet, ManaColor, ManaCost, ManaPieChart, ManaPool, PieSlice};

pub use crate::cards::{
    CardId, CardType, Subtype, Characteristics,
    CardDefinition, CardInstance, CardRegistry,
};

pub use crate::filter::{Filter, FilterContext, FilterDomain, Predicate, TargetController};

pub use crate::effects::{
    Effect, EffectBase, Outcome,
    ContinuousEffect, Layer, Duration,
    ObjectRef, SetTargetPointer, Target, TargetPointer,
    TapAllEffect, ReturnToHandTargetEffect, BecomesColorlessSourceEffect,
};

pub use crate::triggers::{
    EventType, GameEvent,
    Trigger, TapForManaAllTrigger, AttacksAllTrigger, EntersBattlefieldTrigger,
    TriggerRegistry, TriggeredAbility,
};

pub use crate::abilities::{Ability, AbilityId, AbilityKind, AbilityState};

pub use crate::stack::{PriorityStack, ResolutionStatus, StackEntry, StackEntryId, TriggerQueue};

pub use crate::rules::{AutoDecider, Decider, Game, RandomDecider, ScriptedDecider};
