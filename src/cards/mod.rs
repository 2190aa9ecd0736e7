//! Card definitions and instances.
//!
//! - `CardDefinition`: printed card data plus ability templates
//! - `CardInstance`: one card in one game, with its bound abilities
//! - `CardRegistry`: lookup of definitions
//! - `CardType`, `Subtype`, `Characteristics`: the copiable values of a card

mod definition;
mod instance;
mod registry;
mod types;

pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardRegistry;
pub use types::{CardType, Characteristics, Subtype};
