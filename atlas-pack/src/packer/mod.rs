mod heuristic;
mod max_rects;
mod order;

#[doc(inline)]
pub use heuristic::PlacementHeuristic;
#[doc(inline)]
pub use heuristic::PlacementScore;
#[doc(inline)]
pub use max_rects::MaxRectsPacker;
#[doc(inline)]
pub use max_rects::PackReport;
#[doc(inline)]
pub use order::PackOrder;

use crate::PackError;
use crate::entities::Canvas;
use crate::geometry::primitives::PxRect;
use serde::{Deserialize, Serialize};

/// Configuration of the packer's choices, independent of the canvas and spacing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PackConfig {
    /// Rule to select a free rectangle among those the item fits in
    #[serde(default)]
    pub heuristic: PlacementHeuristic,
    /// Order in which items are visited
    #[serde(default)]
    pub order: PackOrder,
}

/// Packs `items` onto a `width` x `height` canvas with the default [`PackConfig`].
/// On success, the position of every item has been written into it.
pub fn pack_items(
    width: u32,
    height: u32,
    spacing: u32,
    items: &mut [PxRect],
) -> Result<PackReport, PackError> {
    let canvas = Canvas::try_new(width, height)?;
    MaxRectsPacker::new(canvas, spacing, PackConfig::default())?.pack(items)
}
