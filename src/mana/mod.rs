//! Mana: colors, costs, pools, and the symbol pie chart.
//!
//! ## Key Types
//!
//! - `ManaColor` / `ColorSet`: kinds of mana and sets of colors
//! - `ManaCost`: a parsed cost such as `{3}{U}`
//! - `ManaPool`: floating mana per player
//! - `ManaPieChart`: arc angles for a mana symbol breakdown

pub mod chart;
pub mod color;
pub mod cost;
pub mod pool;

pub use chart::{ManaPieChart, PieSlice};
pub use color::{ColorSet, ManaColor};
pub use cost::{ManaCost, ManaCostError, ManaSymbol};
pub use pool::ManaPool;
