use crate::geometry::primitives::PxRect;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Order in which the packer visits items.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackOrder {
    /// As given by the caller
    #[default]
    Input,
    /// Tallest first
    Height,
    /// Largest area first
    Area,
    /// Longest side first
    LongestSide,
}

impl PackOrder {
    /// Indices of `items` in visiting order. Items that compare equal keep their input order.
    pub fn order(&self, items: &[PxRect]) -> Vec<usize> {
        let indices = 0..items.len();
        match self {
            PackOrder::Input => indices.collect_vec(),
            PackOrder::Height => indices
                .sorted_by_key(|&i| Reverse((items[i].height, items[i].width)))
                .collect_vec(),
            PackOrder::Area => indices
                .sorted_by_cached_key(|&i| Reverse(items[i].area()))
                .collect_vec(),
            PackOrder::LongestSide => indices
                .sorted_by_key(|&i| {
                    let item = &items[i];
                    Reverse((
                        u32::max(item.width, item.height),
                        u32::min(item.width, item.height),
                    ))
                })
                .collect_vec(),
        }
    }
}
