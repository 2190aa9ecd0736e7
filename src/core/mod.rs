//! Core engine types: entities, players, state, RNG, configuration, errors.
//!
//! Everything else in the crate is built on these. `GameState` is the shared
//! container that filters, triggers and effects read and mutate.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, Zone};
pub use entity::EntityId;
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, PermanentSummary, PublicSnapshot};
