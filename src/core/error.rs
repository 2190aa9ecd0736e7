//! Engine-contract errors.
//!
//! A declined or impossible effect is a normal game outcome and is reported
//! as `Ok(false)` by `Effect::apply`. `EngineError` is only for callers that
//! break the engine's contract: unknown ids, objects in the wrong zone,
//! malformed configuration.

use thiserror::Error;

use super::{EntityId, PlayerId, Zone};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("unknown object: {0}")]
    UnknownObject(EntityId),

    #[error("{entity} is in the {actual} zone, expected {expected}")]
    WrongZone {
        entity: EntityId,
        expected: Zone,
        actual: Zone,
    },

    #[error("{player} does not control {entity}")]
    NotController { entity: EntityId, player: PlayerId },

    #[error("{0} has no mana ability that can be activated")]
    NoManaAbility(EntityId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
