//! Effect system for card abilities.
//!
//! - `Effect`: the one-shot effect trait (`apply`, `clone_box`)
//! - `ContinuousEffect`: effects of static abilities, applied in layers
//! - `TargetPointer` / `Target` / `SetTargetPointer`: what an effect acts on
//! - Common effects: `TapAllEffect`, `ReturnToHandTargetEffect`,
//!   `BecomesColorlessSourceEffect`
//!
//! ## Copy semantics
//!
//! Effects are boxed trait objects owned by abilities. Cloning an ability
//! clones its effects through `clone_box`, so recording a target pointer on
//! one copy can never be observed through another.

mod common;
mod continuous;
mod effect;
mod targeting;

pub use common::{ReturnToHandTargetEffect, TapAllEffect};
pub use continuous::{BecomesColorlessSourceEffect, ContinuousEffect, Duration, Layer};
pub use effect::{Effect, EffectBase, Outcome};
pub use targeting::{ObjectRef, SetTargetPointer, Target, TargetPointer};
