#[cfg(test)]
mod tests {
    use atlas_pack::autosize::AutoSizer;
    use atlas_pack::entities::Canvas;
    use atlas_pack::geometry::primitives::PxRect;
    use atlas_pack::packer::{MaxRectsPacker, PackConfig};
    use atlas_pack::util::assertions::layout_is_valid;
    use atlas_pack::{GeometryViolation, PackError};
    use test_case::test_case;

    /// Attempt that succeeds for every height up to `threshold`
    fn up_to(threshold: u32) -> impl FnMut(u32) -> Result<u32, PackError> {
        move |height| match height <= threshold {
            true => Ok(height),
            false => Err(PackError::Infeasible {
                n_placed: 0,
                n_items: 1,
            }),
        }
    }

    #[test]
    fn finds_every_threshold() {
        for max_height in [1, 2, 3, 16, 31, 100] {
            for threshold in 1..=max_height {
                let search = AutoSizer::new(max_height).search(up_to(threshold)).unwrap();
                assert_eq!(search.height, threshold, "max {max_height}");
                assert_eq!(search.outcome, threshold);
            }
            // everything fits: the search ends at the upper bound
            let search = AutoSizer::new(max_height).search(up_to(u32::MAX)).unwrap();
            assert_eq!(search.height, max_height);
        }
    }

    #[test]
    fn nothing_fits() {
        let result = AutoSizer::new(64).search(up_to(0));
        assert_eq!(result.unwrap_err(), PackError::NoFeasibleSize);
    }

    #[test]
    fn zero_max_height_never_attempts() {
        let mut n_calls = 0;
        let result = AutoSizer::new(0).search(|h| {
            n_calls += 1;
            Ok(h)
        });
        assert_eq!(result.unwrap_err(), PackError::NoFeasibleSize);
        assert_eq!(n_calls, 0);
    }

    #[test_case(1_000_000; "million")]
    #[test_case(u32::MAX - 1; "just below the bound")]
    #[test_case(u32::MAX; "at the bound")]
    fn wide_range_is_logarithmic(threshold: u32) {
        let mut heights = vec![];
        let search = AutoSizer::new(u32::MAX)
            .search(|h| {
                heights.push(h);
                up_to(threshold)(h)
            })
            .unwrap();
        assert_eq!(search.height, threshold);
        assert_eq!(search.n_attempts, heights.len());
        assert!(heights.len() <= 2 * 33, "{} attempts", heights.len());
    }

    #[test]
    fn probing_doubles_until_the_first_failure() {
        let mut heights = vec![];
        AutoSizer::new(1000)
            .search(|h| {
                heights.push(h);
                up_to(20)(h)
            })
            .unwrap();
        // 1, +2, +4, +8 fit; +16 overshoots, then bisect (15, 31)
        assert_eq!(heights, vec![1, 3, 7, 15, 31, 23, 19, 21, 20]);
    }

    #[test]
    fn other_errors_abort_the_search() {
        let violation = GeometryViolation::EmptyItem {
            index: 0,
            width: 0,
            height: 3,
        };
        let mut n_calls = 0;
        let result = AutoSizer::new(100).search(|h| {
            n_calls += 1;
            match h {
                1 => Ok(()),
                _ => Err(PackError::from(violation.clone())),
            }
        });
        assert_eq!(result.unwrap_err(), PackError::InvalidGeometry(violation));
        assert_eq!(n_calls, 2);
    }

    #[test]
    fn square_item_grows_to_the_canvas() {
        let canvas = Canvas::try_new(16, 16).unwrap();
        let packer = MaxRectsPacker::new(canvas, 0, PackConfig::default()).unwrap();
        let search = AutoSizer::for_canvas(&canvas)
            .search_items(&packer, |h| vec![PxRect::with_size(h, h)])
            .unwrap();
        assert_eq!(search.height, 16);
        let (items, report) = search.outcome;
        assert_eq!(items, vec![PxRect::new(0, 0, 16, 16)]);
        assert_eq!(report.density(), 1.0);
    }

    #[test_case(0; "without spacing")]
    #[test_case(2; "with spacing")]
    fn largest_fitting_height_is_tight(spacing: u32) {
        // a row of glyph-like boxes, half as wide as they are tall
        let canvas = Canvas::try_new(128, 64).unwrap();
        let packer = MaxRectsPacker::new(canvas, spacing, PackConfig::default()).unwrap();
        let build = |h: u32| vec![PxRect::with_size(u32::max(1, h / 2), h); 12];

        let search = AutoSizer::for_canvas(&canvas)
            .search_items(&packer, build)
            .unwrap();
        let (items, _) = &search.outcome;
        assert!(layout_is_valid(&canvas, items, spacing));

        let mut bigger = build(search.height + 1);
        assert!(matches!(
            packer.pack(&mut bigger),
            Err(PackError::Infeasible { .. })
        ));
    }
}
