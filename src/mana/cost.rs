//! Mana costs.
//!
//! Costs are written the usual way, one symbol per brace group:
//! `{3}{U}`, `{R}{R}`, `{X}{G}`, `{C}`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::color::{ColorSet, ManaColor};

/// One symbol of a mana cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaSymbol {
    Generic(u32),
    Colored(ManaColor),
    X,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManaCostError {
    #[error("unterminated symbol in mana cost {0:?}")]
    Unterminated(String),
    #[error("unknown mana symbol {{{0}}}")]
    UnknownSymbol(String),
    #[error("unexpected character {0:?} outside braces")]
    Unexpected(char),
}

/// A parsed mana cost.
///
/// ```
/// use ccg_rules::mana::{ManaColor, ManaCost};
///
/// let cost = ManaCost::parse("{3}{U}").unwrap();
/// assert_eq!(cost.mana_value(), 4);
/// assert!(cost.colors().contains(ManaColor::Blue));
/// assert_eq!(cost.to_string(), "{3}{U}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCost {
    symbols: SmallVec<[ManaSymbol; 4]>,
}

impl ManaCost {
    /// Parse a cost string. The empty string is the empty cost (lands).
    pub fn parse(text: &str) -> Result<Self, ManaCostError> {
        let mut symbols = SmallVec::new();
        let mut rest = text.trim();

        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('{') else {
                let c = rest.chars().next().unwrap_or('{');
                return Err(ManaCostError::Unexpected(c));
            };
            let Some(end) = body.find('}') else {
                return Err(ManaCostError::Unterminated(text.to_string()));
            };
            symbols.push(Self::parse_symbol(&body[..end])?);
            rest = &body[end + 1..];
        }

        Ok(Self { symbols })
    }

    fn parse_symbol(symbol: &str) -> Result<ManaSymbol, ManaCostError> {
        if let Ok(n) = symbol.parse::<u32>() {
            return Ok(ManaSymbol::Generic(n));
        }
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some('X' | 'x'), None) => Ok(ManaSymbol::X),
            (Some(c), None) => ManaColor::from_symbol(c)
                .map(ManaSymbol::Colored)
                .ok_or_else(|| ManaCostError::UnknownSymbol(symbol.to_string())),
            _ => Err(ManaCostError::UnknownSymbol(symbol.to_string())),
        }
    }

    #[must_use]
    pub fn symbols(&self) -> &[ManaSymbol] {
        &self.symbols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total mana value; X counts as zero.
    #[must_use]
    pub fn mana_value(&self) -> u32 {
        self.symbols
            .iter()
            .map(|s| match s {
                ManaSymbol::Generic(n) => *n,
                ManaSymbol::Colored(_) => 1,
                ManaSymbol::X => 0,
            })
            .sum()
    }

    /// Colors of the cost, which are the colors of a card by default.
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        ColorSet::of(self.symbols.iter().filter_map(|s| match s {
            ManaSymbol::Colored(c) => Some(*c),
            _ => None,
        }))
    }

    /// Number of mana of a kind in the cost. Generic amounts count as colorless.
    #[must_use]
    pub fn count(&self, color: ManaColor) -> u32 {
        self.symbols
            .iter()
            .map(|s| match (s, color) {
                (ManaSymbol::Colored(c), _) if *c == color => 1,
                (ManaSymbol::Generic(n), ManaColor::Colorless) => *n,
                _ => 0,
            })
            .sum()
    }
}

impl std::str::FromStr for ManaCost {
    type Err = ManaCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ManaCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            match symbol {
                ManaSymbol::Generic(n) => write!(f, "{{{n}}}")?,
                ManaSymbol::Colored(c) => write!(f, "{c}")?,
                ManaSymbol::X => f.write_str("{X}")?,
            }
        }
        Ok(())
    }
}
