//! Mana pools.

use serde::{Deserialize, Serialize};

use super::color::ManaColor;

/// Floating mana a player has available, one counter per kind of mana.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaPool {
    amounts: [u32; 6],
}

impl ManaPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, color: ManaColor, amount: u32) {
        self.amounts[color.index()] += amount;
    }

    #[must_use]
    pub fn get(&self, color: ManaColor) -> u32 {
        self.amounts[color.index()]
    }

    /// Remove `amount` mana of a kind. Returns false, leaving the pool
    /// untouched, if there is not enough.
    pub fn spend(&mut self, color: ManaColor, amount: u32) -> bool {
        let slot = &mut self.amounts[color.index()];
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.amounts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Empty the pool.
    pub fn clear(&mut self) {
        self.amounts = [0; 6];
    }

    /// Iterate over the kinds of mana present, in WUBRG order.
    pub fn iter(&self) -> impl Iterator<Item = (ManaColor, u32)> + '_ {
        ManaColor::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, n)| *n > 0)
    }
}
