use crate::geometry::primitives::PxRect;

/// Maximal sub-rectangles of free rectangle `free` that remain available after `placed`,
/// inflated by `spacing`, has been carved out of it.
///
/// Up to four remainders are produced (left, right, top, bottom of `placed`), each spanning the
/// full extent of `free` along the other axis. They overlap each other; redundant ones are
/// pruned by the free-space set afterwards.
///
/// `free` must overlap `placed` (with spacing), otherwise nothing has to be carved out and the
/// returned remainders are meaningless.
pub fn make_splits(free: PxRect, placed: PxRect, spacing: u32) -> impl Iterator<Item = PxRect> {
    debug_assert!(free.overlaps(&placed, spacing));

    let left = (free.x + spacing < placed.x).then(|| {
        PxRect::new(free.x, free.y, placed.x - spacing - free.x, free.height)
    });

    let right = (free.right() > placed.right() + spacing).then(|| {
        let x = placed.right() + spacing;
        PxRect::new(x, free.y, free.right() - x, free.height)
    });

    let top = (free.top() > placed.top() + spacing).then(|| {
        let y = placed.top() + spacing;
        PxRect::new(free.x, y, free.width, free.top() - y)
    });

    let bottom = (free.y + spacing < placed.y).then(|| {
        PxRect::new(free.x, free.y, free.width, placed.y - spacing - free.y)
    });

    [left, right, top, bottom].into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn corner_placement_leaves_right_and_top() {
        let canvas = PxRect::with_size(10, 10);
        let splits = make_splits(canvas, PxRect::new(0, 0, 4, 4), 0).collect_vec();
        assert_eq!(
            splits,
            vec![PxRect::new(4, 0, 6, 10), PxRect::new(0, 4, 10, 6)]
        );
    }

    #[test]
    fn spacing_is_subtracted_on_every_side() {
        let free = PxRect::new(0, 0, 20, 20);
        let splits = make_splits(free, PxRect::new(8, 8, 4, 4), 2).collect_vec();
        assert_eq!(
            splits,
            vec![
                PxRect::new(0, 0, 6, 20),
                PxRect::new(14, 0, 6, 20),
                PxRect::new(0, 14, 20, 6),
                PxRect::new(0, 0, 20, 6),
            ]
        );
    }

    #[test]
    fn exact_fit_leaves_nothing() {
        let free = PxRect::new(3, 3, 5, 5);
        assert_eq!(make_splits(free, free, 0).count(), 0);
        assert_eq!(make_splits(free, free, 3).count(), 0);
    }

    #[test]
    fn remainder_thinner_than_spacing_is_dropped() {
        let free = PxRect::new(0, 0, 6, 4);
        // 2 texels remain to the right, both swallowed by the spacing
        let splits = make_splits(free, PxRect::new(0, 0, 4, 4), 2).collect_vec();
        assert!(splits.is_empty());
    }

    #[test]
    fn partially_covered_neighbour_is_clipped() {
        // free rectangle that only shares a band with the placed item
        let free = PxRect::new(0, 4, 10, 6);
        let placed = PxRect::new(4, 0, 6, 6);
        let splits = make_splits(free, placed, 0).collect_vec();
        assert_eq!(
            splits,
            vec![PxRect::new(0, 4, 4, 6), PxRect::new(0, 6, 10, 4)]
        );
    }
}
