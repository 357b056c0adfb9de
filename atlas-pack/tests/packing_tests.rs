#[cfg(test)]
mod tests {
    use atlas_pack::entities::Canvas;
    use atlas_pack::geometry::primitives::PxRect;
    use atlas_pack::packer::{
        MaxRectsPacker, PackConfig, PackOrder, PlacementHeuristic, pack_items,
    };
    use atlas_pack::util::assertions::layout_is_valid;
    use atlas_pack::{GeometryViolation, PackError};
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const HEURISTICS: [PlacementHeuristic; 4] = [
        PlacementHeuristic::BestAreaFit,
        PlacementHeuristic::BestShortSideFit,
        PlacementHeuristic::BestLongSideFit,
        PlacementHeuristic::BottomLeft,
    ];

    const ORDERS: [PackOrder; 4] = [
        PackOrder::Input,
        PackOrder::Height,
        PackOrder::Area,
        PackOrder::LongestSide,
    ];

    fn items(sizes: &[(u32, u32)]) -> Vec<PxRect> {
        sizes
            .iter()
            .map(|&(w, h)| PxRect::with_size(w, h))
            .collect_vec()
    }

    fn random_items(rng: &mut impl Rng, n: usize, max_w: u32, max_h: u32) -> Vec<PxRect> {
        (0..n)
            .map(|_| PxRect::with_size(rng.random_range(1..=max_w), rng.random_range(1..=max_h)))
            .collect_vec()
    }

    #[test_case(10, 10, 0, &[(4, 4), (4, 4), (4, 4)], true; "three squares with room to spare")]
    #[test_case(5, 5, 0, &[(4, 4), (4, 4)], false; "two squares too many")]
    #[test_case(10, 10, 1, &[(5, 5), (5, 5)], false; "spacing pushes second square out")]
    #[test_case(10, 10, 0, &[(5, 5), (5, 5), (5, 5), (5, 5)], true; "four quadrants")]
    #[test_case(11, 11, 1, &[(5, 5), (5, 5), (5, 5), (5, 5)], true; "four quadrants with spacing")]
    #[test_case(16, 16, 0, &[(16, 16)], true; "exact fit")]
    #[test_case(16, 16, 0, &[(17, 1)], false; "wider than canvas")]
    #[test_case(8, 8, 3, &[], true; "nothing to place")]
    fn scenario(width: u32, height: u32, spacing: u32, sizes: &[(u32, u32)], fits: bool) {
        let mut items = items(sizes);
        let result = pack_items(width, height, spacing, &mut items);
        assert_eq!(result.is_ok(), fits, "{result:?}");
        if fits {
            let canvas = Canvas::try_new(width, height).unwrap();
            assert!(layout_is_valid(&canvas, &items, spacing));
            assert_eq!(result.unwrap().n_items, sizes.len());
        } else {
            assert!(matches!(result, Err(PackError::Infeasible { .. })));
        }
    }

    #[test]
    fn sizes_are_preserved() {
        let sizes = [(3, 7), (7, 3), (1, 1), (5, 2)];
        let mut items = items(&sizes);
        pack_items(32, 32, 2, &mut items).unwrap();
        let placed_sizes = items.iter().map(|i| (i.width, i.height)).collect_vec();
        assert_eq!(placed_sizes, sizes);
    }

    #[test]
    fn failure_reports_progress() {
        let mut items = items(&[(4, 4), (4, 4), (4, 4)]);
        let result = pack_items(8, 4, 0, &mut items);
        assert_eq!(
            result,
            Err(PackError::Infeasible {
                n_placed: 2,
                n_items: 3
            })
        );
    }

    #[test_case(0, 10, 0; "zero width canvas")]
    #[test_case(10, 0, 0; "zero height canvas")]
    #[test_case(10, 10, 11; "spacing beyond canvas")]
    #[test_case(u32::MAX, 10, 2; "coordinates overflow")]
    fn invalid_setup(width: u32, height: u32, spacing: u32) {
        let mut items = items(&[(1, 1)]);
        let result = pack_items(width, height, spacing, &mut items);
        assert!(matches!(result, Err(PackError::InvalidGeometry(_))), "{result:?}");
    }

    #[test]
    fn empty_item_is_invalid() {
        let mut items = items(&[(2, 2), (0, 3)]);
        let result = pack_items(10, 10, 0, &mut items);
        assert_eq!(
            result,
            Err(PackError::InvalidGeometry(GeometryViolation::EmptyItem {
                index: 1,
                width: 0,
                height: 3
            }))
        );
    }

    #[test]
    fn packer_is_reusable() {
        let canvas = Canvas::try_new(20, 20).unwrap();
        let packer = MaxRectsPacker::new(canvas, 1, PackConfig::default()).unwrap();

        let mut first = items(&[(10, 10), (9, 9)]);
        let mut second = first.clone();
        packer.pack(&mut first).unwrap();
        packer.pack(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn packing_is_deterministic() {
        let mut rng = SmallRng::seed_from_u64(7);
        let input = random_items(&mut rng, 60, 20, 20);
        for heuristic in HEURISTICS {
            let config = PackConfig {
                heuristic,
                order: PackOrder::Area,
            };
            let packer =
                MaxRectsPacker::new(Canvas::try_new(256, 256).unwrap(), 2, config).unwrap();
            let (mut a, mut b) = (input.clone(), input.clone());
            packer.pack(&mut a).unwrap();
            packer.pack(&mut b).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    #[test_case(4; "seed 4")]
    fn random_layouts_are_valid(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for heuristic in HEURISTICS {
            for order in ORDERS {
                let spacing = rng.random_range(0..=3);
                let (width, height) = (rng.random_range(32..=128), rng.random_range(32..=128));
                let n_items = rng.random_range(1..=80);
                let mut items = random_items(&mut rng, n_items, 24, 24);

                let canvas = Canvas::try_new(width, height).unwrap();
                let packer =
                    MaxRectsPacker::new(canvas, spacing, PackConfig { heuristic, order }).unwrap();
                match packer.pack(&mut items) {
                    Ok(report) => {
                        assert!(layout_is_valid(&canvas, &items, spacing));
                        assert!(report.density() <= 1.0);
                        let area: u64 = items.iter().map(|i| i.area()).sum();
                        assert_eq!(report.used_area, area);
                    }
                    Err(err) => assert!(matches!(err, PackError::Infeasible { .. })),
                }
            }
        }
    }

    #[test]
    fn uniform_squares_fill_a_grid() {
        // 8x8 grid of 7x7 squares, 1 texel apart
        let mut items = vec![PxRect::with_size(7, 7); 64];
        let canvas = Canvas::try_new(63, 63).unwrap();
        for heuristic in HEURISTICS {
            let config = PackConfig {
                heuristic,
                ..PackConfig::default()
            };
            let packer = MaxRectsPacker::new(canvas, 1, config).unwrap();
            packer.pack(&mut items).unwrap();
            assert!(layout_is_valid(&canvas, &items, 1));
        }
    }

    #[test_case(10, 10, 0, &[(4, 4), (4, 4), (4, 4)]; "three squares")]
    #[test_case(11, 11, 1, &[(5, 5), (5, 5), (5, 5), (5, 5)]; "four quadrants with spacing")]
    #[test_case(16, 16, 0, &[(16, 16)]; "exact fit")]
    #[test_case(32, 16, 2, &[(9, 14), (4, 13), (12, 7), (6, 6), (3, 5)]; "mixed sizes")]
    fn scaled_down_items_still_fit(width: u32, height: u32, spacing: u32, sizes: &[(u32, u32)]) {
        assert!(pack_items(width, height, spacing, &mut items(sizes)).is_ok());
        for factor in [0.9, 0.75, 0.5, 0.25, 0.1] {
            let scale = |v: u32| u32::max(1, (v as f64 * factor) as u32);
            let mut scaled = sizes
                .iter()
                .map(|&(w, h)| PxRect::with_size(scale(w), scale(h)))
                .collect_vec();
            assert!(
                pack_items(width, height, spacing, &mut scaled).is_ok(),
                "factor {factor}"
            );
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    fn scaled_down_glyph_sets_still_fit(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sizes = (0..120)
            .map(|_| (rng.random_range(0.2..0.7), rng.random_range(0.4..1.0)))
            .collect_vec();
        let build = |height: f64| {
            sizes
                .iter()
                .map(|&(w, h): &(f64, f64)| {
                    let side = |v: f64| (v * height).ceil() as u32 + 4;
                    PxRect::with_size(side(w), side(h))
                })
                .collect_vec()
        };

        assert!(pack_items(512, 512, 2, &mut build(32.0)).is_ok());
        for height in [31.0, 28.0, 24.0, 16.0, 8.0, 1.0] {
            assert!(
                pack_items(512, 512, 2, &mut build(height)).is_ok(),
                "height {height}"
            );
        }
    }

    #[test]
    fn glyph_like_set_fits_a_page() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();

        // roughly the 95 printable ASCII glyphs at 32 texels with 2 texels of padding
        let mut rng = SmallRng::seed_from_u64(95);
        let mut items = (0..95)
            .map(|_| PxRect::with_size(rng.random_range(8..=28), rng.random_range(10..=36)))
            .collect_vec();
        let report = pack_items(512, 256, 2, &mut items).unwrap();
        assert!(report.density() > 0.2);
    }
}
