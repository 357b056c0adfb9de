use crate::entities::Canvas;
use crate::geometry::make_splits;
use crate::geometry::primitives::PxRect;
use crate::packer::PlacementHeuristic;
use crate::util::assertions;

/// Set of maximal free rectangles of a canvas, updated incrementally as items are placed.
///
/// Members may overlap each other, but after every update none of them is contained in another.
/// The rectangles are stored in an unordered, index-addressed `Vec`; removal swaps the last member in.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    rects: Vec<PxRect>,
    spacing: u32,
    /// Scratch buffer for the remainders produced while occupying space
    splits: Vec<PxRect>,
}

impl FreeSpace {
    /// Free space of an empty canvas: the canvas itself.
    pub fn new(canvas: &Canvas, spacing: u32) -> Self {
        FreeSpace {
            rects: vec![canvas.bbox()],
            spacing,
            splits: vec![],
        }
    }

    pub fn rects(&self) -> &[PxRect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Finds the free rectangle preferred by `heuristic` among those large enough for `item`,
    /// and returns `item` positioned at its lower-left corner.
    pub fn find_placement(&self, item: &PxRect, heuristic: PlacementHeuristic) -> Option<PxRect> {
        self.rects
            .iter()
            .filter(|free| free.can_fit(item))
            .min_by_key(|free| heuristic.score(free, item))
            .map(|free| PxRect::new(free.x, free.y, item.width, item.height))
    }

    /// Removes the footprint of `placed` (inflated by the spacing) from the free space.
    ///
    /// Every free rectangle the footprint reaches into is replaced by its remainders,
    /// after which contained rectangles are pruned.
    pub fn occupy(&mut self, placed: &PxRect) {
        let spacing = self.spacing;
        let mut i = 0;
        while i < self.rects.len() {
            if self.rects[i].overlaps(placed, spacing) {
                let free = self.rects.swap_remove(i);
                self.splits.extend(make_splits(free, *placed, spacing));
            } else {
                i += 1;
            }
        }
        self.rects.append(&mut self.splits);
        self.prune();

        debug_assert!(assertions::free_space_clear_of(self, placed));
        debug_assert!(assertions::free_space_is_maximal(self));
    }

    /// Removes every free rectangle contained in another member.
    /// Of a group of identical rectangles exactly one is kept.
    pub fn prune(&mut self) {
        let mut i = 0;
        while i < self.rects.len() {
            let rect = self.rects[i];
            let redundant = self
                .rects
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.contains(&rect));
            if redundant {
                self.rects.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
impl FreeSpace {
    pub(crate) fn from_rects(rects: Vec<PxRect>, spacing: u32) -> Self {
        FreeSpace {
            rects,
            spacing,
            splits: vec![],
        }
    }
}
