//! Card content.
//!
//! Each card is a function returning its `CardDefinition`. Definitions are
//! templates: every game object gets its own bound copy of their abilities.
//!
//! - `basics`: basic lands and vanilla test cards
//! - `wars_toll`: Wars Toll
//! - `murk_strider`: Murk Strider

pub mod basics;
pub mod murk_strider;
pub mod wars_toll;

pub use murk_strider::{murk_strider, MurkStriderEffect, MURK_STRIDER};
pub use wars_toll::{wars_toll, WarsTollEffect, WARS_TOLL};

use crate::cards::CardRegistry;

/// Every card in this crate.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in basics::all() {
        registry.register(card);
    }
    registry.register(wars_toll());
    registry.register(murk_strider());
    registry
}
