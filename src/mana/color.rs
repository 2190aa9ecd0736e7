//! Mana colors and color sets.

use serde::{Deserialize, Serialize};

/// A kind of mana. `Colorless` is both the `{C}` symbol and the bucket
/// generic costs are counted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManaColor {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl ManaColor {
    /// All mana kinds in WUBRG order, colorless last.
    pub const ALL: [ManaColor; 6] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
        ManaColor::Colorless,
    ];

    /// The five colors.
    pub const COLORS: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
            ManaColor::Colorless => 'C',
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(ManaColor::White),
            'U' => Some(ManaColor::Blue),
            'B' => Some(ManaColor::Black),
            'R' => Some(ManaColor::Red),
            'G' => Some(ManaColor::Green),
            'C' => Some(ManaColor::Colorless),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_color(self) -> bool {
        !matches!(self, ManaColor::Colorless)
    }
}

impl std::fmt::Display for ManaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbol())
    }
}

/// A set of colors (never contains `Colorless`; an empty set is colorless).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: ColorSet = ColorSet(0);

    #[must_use]
    pub fn of(colors: impl IntoIterator<Item = ManaColor>) -> Self {
        let mut set = Self::COLORLESS;
        for color in colors {
            set.insert(color);
        }
        set
    }

    pub fn insert(&mut self, color: ManaColor) {
        if color.is_color() {
            self.0 |= 1 << color.index();
        }
    }

    #[must_use]
    pub const fn contains(self, color: ManaColor) -> bool {
        color.is_color() && self.0 & (1 << color.index()) != 0
    }

    #[must_use]
    pub const fn is_colorless(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = ManaColor> {
        ManaColor::COLORS.into_iter().filter(move |c| self.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for color in ManaColor::ALL {
            assert_eq!(ManaColor::from_symbol(color.symbol()), Some(color));
        }
        assert_eq!(ManaColor::from_symbol('u'), Some(ManaColor::Blue));
        assert_eq!(ManaColor::from_symbol('X'), None);
    }

    #[test]
    fn test_color_set() {
        let set = ColorSet::of([ManaColor::Blue, ManaColor::Red, ManaColor::Colorless]);
        assert_eq!(set.count(), 2);
        assert!(set.contains(ManaColor::Blue));
        assert!(!set.contains(ManaColor::Colorless));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![ManaColor::Blue, ManaColor::Red]);
        assert!(ColorSet::default().is_colorless());
    }
}
