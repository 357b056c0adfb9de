use crate::geometry::primitives::PxRect;
use serde::{Deserialize, Serialize};

/// Rule deciding which free rectangle receives an item when it fits in several.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlacementHeuristic {
    /// Free rectangle with the least area left over
    #[default]
    BestAreaFit,
    /// Free rectangle with the smallest leftover along its tightest side
    BestShortSideFit,
    /// Free rectangle with the smallest leftover along its loosest side
    BestLongSideFit,
    /// Free rectangle that puts the top of the item lowest, then leftmost
    BottomLeft,
}

/// Lexicographically ordered score of placing an item in a free rectangle, lower is better.
///
/// The trailing position and width fields make the order total over distinct free rectangles,
/// so the choice does not depend on the order in which the free space is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlacementScore {
    pub primary: u64,
    pub secondary: u64,
    pub tertiary: u64,
    pub y: u32,
    pub x: u32,
    pub width: u32,
}

impl PlacementHeuristic {
    /// Scores placing `item` at the lower-left corner of `free`, which must be large enough.
    pub fn score(&self, free: &PxRect, item: &PxRect) -> PlacementScore {
        debug_assert!(free.can_fit(item));
        let leftover_h = (free.width - item.width) as u64;
        let leftover_v = (free.height - item.height) as u64;
        let short_side = u64::min(leftover_h, leftover_v);
        let long_side = u64::max(leftover_h, leftover_v);
        let area = free.area() - item.area();

        let (primary, secondary, tertiary) = match self {
            PlacementHeuristic::BestAreaFit => (area, short_side, long_side),
            PlacementHeuristic::BestShortSideFit => (short_side, long_side, area),
            PlacementHeuristic::BestLongSideFit => (long_side, short_side, area),
            PlacementHeuristic::BottomLeft => {
                ((free.y + item.height) as u64, free.x as u64, area)
            }
        };

        PlacementScore {
            primary,
            secondary,
            tertiary,
            y: free.y,
            x: free.x,
            width: free.width,
        }
    }
}
