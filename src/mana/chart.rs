//! Pie chart geometry for mana symbol counts.
//!
//! Only the arc computation lives here; drawing is left to whatever UI
//! consumes the slices. Each slice gets `value * 360 / total` degrees,
//! truncated, and starts where the previous one ended. Truncation means
//! the arcs can add up to slightly less than a full circle.

use serde::{Deserialize, Serialize};

use super::color::ManaColor;
use super::cost::ManaCost;

/// One slice of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub color: ManaColor,
    pub value: u32,
    /// Degrees, counter-clockwise from the start of the first slice.
    pub start_angle: u32,
    pub arc_angle: u32,
}

/// Mana symbol counts per kind of mana.
///
/// ```
/// use ccg_rules::mana::{ManaColor, ManaPieChart};
///
/// let chart = ManaPieChart::new(Some(2), Some(0), Some(1), None, None, Some(1));
/// let arcs: Vec<_> = chart.slices().iter().map(|s| (s.color, s.arc_angle)).collect();
/// assert_eq!(
///     arcs,
///     vec![(ManaColor::White, 180), (ManaColor::Black, 90), (ManaColor::Colorless, 90)]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPieChart {
    values: [Option<u32>; 6],
}

impl ManaPieChart {
    /// Build a chart from counts in W, U, B, R, G, colorless order.
    ///
    /// `None` and zero both mean "no slice".
    #[must_use]
    pub fn new(
        w: Option<u32>,
        u: Option<u32>,
        b: Option<u32>,
        r: Option<u32>,
        g: Option<u32>,
        c: Option<u32>,
    ) -> Self {
        Self {
            values: [w, u, b, r, g, c],
        }
    }

    /// Sum the symbols of a set of costs. Generic mana goes to the colorless bucket.
    pub fn from_costs<'a>(costs: impl IntoIterator<Item = &'a ManaCost>) -> Self {
        let mut values = [None; 6];
        for cost in costs {
            for color in ManaColor::ALL {
                let n = cost.count(color);
                if n > 0 {
                    *values[color.index()].get_or_insert(0) += n;
                }
            }
        }
        Self { values }
    }

    #[must_use]
    pub fn value(&self, color: ManaColor) -> Option<u32> {
        self.values[color.index()]
    }

    /// Sum of every present bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// The slices to draw, in WUBRG order with colorless last.
    ///
    /// Empty when every bucket is missing or zero.
    #[must_use]
    pub fn slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut start_angle = 0;
        let mut slices = Vec::new();
        for color in ManaColor::ALL {
            let Some(value) = self.value(color).filter(|&v| v > 0) else {
                continue;
            };
            let arc_angle = (u64::from(value) * 360 / total) as u32;
            slices.push(PieSlice {
                color,
                value,
                start_angle,
                arc_angle,
            });
            start_angle += arc_angle;
        }
        slices
    }
}
