use crate::PackError;
use crate::entities::{Canvas, FreeSpace};
use crate::error::GeometryViolation;
use crate::geometry::primitives::PxRect;
use crate::packer::PackConfig;
use crate::util::assertions;
use log::{debug, trace};

/// Places items one by one on a single canvas, tracking the remaining space as a set of
/// maximal free rectangles.
///
/// Every [`pack`](MaxRectsPacker::pack) call is an independent run starting from an empty canvas,
/// so the packer can be reused for any number of item sets.
#[derive(Clone, Copy, Debug)]
pub struct MaxRectsPacker {
    canvas: Canvas,
    spacing: u32,
    config: PackConfig,
}

/// Summary of a successful packing run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackReport {
    pub n_items: usize,
    /// Sum of the areas of all placed items, spacing excluded
    pub used_area: u64,
    pub canvas_area: u64,
    /// Largest number of free rectangles tracked at once during the run
    pub peak_free_rects: usize,
}

impl PackReport {
    /// Fraction of the canvas covered by items
    pub fn density(&self) -> f64 {
        self.used_area as f64 / self.canvas_area as f64
    }
}

impl MaxRectsPacker {
    /// Creates a packer for `canvas` keeping at least `spacing` texels between any two items.
    pub fn new(canvas: Canvas, spacing: u32, config: PackConfig) -> Result<Self, PackError> {
        canvas.check_spacing(spacing)?;
        Ok(MaxRectsPacker {
            canvas,
            spacing,
            config,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Assigns a position to every item, only their sizes are read.
    ///
    /// On success all items lie within the canvas and no two of them come closer than the spacing.
    /// On failure the run stops at the first item that does not fit, and the positions written
    /// so far must be discarded.
    pub fn pack(&self, items: &mut [PxRect]) -> Result<PackReport, PackError> {
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.width == 0 || item.height == 0)
        {
            return Err(GeometryViolation::EmptyItem {
                index,
                width: item.width,
                height: item.height,
            }
            .into());
        }

        let n_items = items.len();
        let mut free_space = FreeSpace::new(&self.canvas, self.spacing);
        let mut peak_free_rects = free_space.len();
        let mut used_area = 0;

        for (n_placed, index) in self.config.order.order(items).into_iter().enumerate() {
            let item = &mut items[index];
            let Some(placed) = free_space.find_placement(item, self.config.heuristic) else {
                debug!(
                    "[PACK] item {index} ({}x{}) does not fit, {n_placed}/{n_items} items placed",
                    item.width, item.height
                );
                return Err(PackError::Infeasible { n_placed, n_items });
            };
            free_space.occupy(&placed);
            *item = placed;

            used_area += placed.area();
            peak_free_rects = usize::max(peak_free_rects, free_space.len());
            trace!(
                "[PACK] placed item {index} at {placed}, {} free rectangles",
                free_space.len()
            );
        }

        debug_assert!(assertions::layout_is_valid(
            &self.canvas,
            items,
            self.spacing
        ));

        let report = PackReport {
            n_items,
            used_area,
            canvas_area: self.canvas.area(),
            peak_free_rects,
        };
        debug!(
            "[PACK] placed {n_items} items, density: {:.3}%",
            report.density() * 100.0
        );
        Ok(report)
    }
}
