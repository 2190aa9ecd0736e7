//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Zone kind (from `core::config`)
//! - `ZoneKey`: A zone instance (zone + owner for per-player zones)
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{ZoneKey, ZoneManager};

pub use crate::core::config::Zone;
