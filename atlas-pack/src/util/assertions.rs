use crate::entities::{Canvas, FreeSpace};
use crate::geometry::primitives::PxRect;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// No free rectangle may reach into the spacing-inflated footprint of a placed item
pub fn free_space_clear_of(free_space: &FreeSpace, placed: &PxRect) -> bool {
    let spacing = free_space.spacing();
    match free_space
        .rects()
        .iter()
        .find(|free| free.overlaps(placed, spacing))
    {
        Some(free) => {
            error!("free rectangle {free} overlaps placed item {placed}");
            false
        }
        None => true,
    }
}

/// No free rectangle may be contained in another one
pub fn free_space_is_maximal(free_space: &FreeSpace) -> bool {
    let rects = free_space.rects();
    for (i, j) in (0..rects.len()).tuple_combinations() {
        if rects[i].contains(&rects[j]) || rects[j].contains(&rects[i]) {
            error!(
                "free rectangles {} and {} are not maximal",
                rects[i], rects[j]
            );
            return false;
        }
    }
    true
}

/// Every item lies within the canvas and no two items come closer than `spacing`
pub fn layout_is_valid(canvas: &Canvas, items: &[PxRect], spacing: u32) -> bool {
    let bbox = canvas.bbox();
    if let Some((i, item)) = items.iter().enumerate().find(|(_, it)| !bbox.contains(it)) {
        error!("item {i} at {item} exceeds the {bbox} canvas");
        return false;
    }
    for (i, j) in (0..items.len()).tuple_combinations() {
        if items[i].overlaps(&items[j], spacing) {
            error!(
                "items {i} at {} and {j} at {} are closer than {spacing}",
                items[i], items[j]
            );
            return false;
        }
    }
    true
}
