//! Rules: the `Game` facade, player decisions and combat.
//!
//! - `Game`: owns the state and drives trigger processing and resolution
//! - `Decider`: answers the questions effects ask players
//! - `combat`: attack eligibility for declared and forced attacks

pub mod combat;
mod decision;
mod game;

pub use decision::{AutoDecider, Decider, RandomDecider, ScriptedDecider};
pub use game::Game;
