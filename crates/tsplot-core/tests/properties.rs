// File: crates/tsplot-core/tests/properties.rs
// Purpose: Property tests for coordinate clamping, transforms and tick ordering.

use proptest::prelude::*;
use tsplot_core::layout::tick_labels;
use tsplot_core::{Color, CoordinateMapper, DataSeries, ScaleGroup, ValueRange};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Any real input lands inside the plot rectangle.
    #[test]
    fn prop_mapper_stays_inside_plot(
        count in 1usize..2000,
        width_factor in 0.1f64..8.0,
        border in 0u32..100,
        extra in 1i32..1000,
        fx in -1e6f64..1e6,
        fy in -1e6f64..1e6,
    ) {
        let height = 2 * border as i32 + extra;
        let mapper = CoordinateMapper::new(count, width_factor, border, height);
        let rect = mapper.plot_rect();
        let (x, y) = mapper.map(fx, fy).expect("finite input maps");
        prop_assert!(rect.contains(x, y), "({x}, {y}) outside {rect:?}");
    }

    #[test]
    fn prop_transform_is_finite_for_numeric_input(
        values in prop::collection::vec(-1e9f64..1e9, 0..64),
        value in -1e9f64..1e9,
    ) {
        let s = DataSeries::new("p", Color::WHITE, values);
        prop_assert!(s.transform(value).is_finite());
        for &v in s.samples() {
            let t = s.transform(v);
            prop_assert!((0.0..=1.0).contains(&t));
        }
    }

    #[test]
    fn prop_join_covers_every_participant_and_bound(
        a in prop::collection::vec(-1e6f64..1e6, 1..32),
        b in prop::collection::vec(-1e6f64..1e6, 1..32),
        lo in -1e6f64..1e6,
        span in 0f64..1e6,
    ) {
        let sa = DataSeries::new("a", Color::WHITE, a);
        let sb = DataSeries::new("b", Color::WHITE, b);
        let joined = ScaleGroup::join([&sa, &sb]).unwrap().range();
        prop_assert_eq!(joined.max, sa.max().max(sb.max()));
        prop_assert_eq!(joined.min, sa.min().min(sb.min()));

        let forced = ScaleGroup::join_with_bounds([&sa, &sb], lo, lo + span).range();
        prop_assert!(forced.min <= lo);
        prop_assert!(forced.max >= lo + span);
    }

    #[test]
    fn prop_tick_labels_strictly_decrease(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6,
        ticks in 1usize..60,
        integer in any::<bool>(),
    ) {
        let range = ValueRange::new(min, min + span);
        let labels = tick_labels(range, integer, ticks);
        prop_assert_eq!(labels.len(), ticks + 1);
        prop_assert_eq!(labels[0].value, range.max);
        prop_assert!((labels[ticks].value - range.min).abs() < 1e-9);
        prop_assert!(labels.windows(2).all(|w| w[0].value > w[1].value));
    }
}
