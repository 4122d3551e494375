use proptest::prelude::*;
use xygraph_rs::core::{
    Accessor, AxisEdge, AxisRange, Coordinate, Datum, RangeContext, RangeMode, ScaleKind,
    ScaleParams, categories, extent, nearest_index, transform_series, window, window_linear,
};

fn sorted_series(xs: &[i32]) -> Vec<Coordinate> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs.iter()
        .enumerate()
        .map(|(index, &x)| Coordinate::new(f64::from(x), 0.0, index))
        .collect()
}

proptest! {
    #[test]
    fn transform_sorts_stably(keys in prop::collection::vec(-20i32..20, 0..64)) {
        let x = Accessor::from_fn(|item: &(i32, usize)| Datum::Number(f64::from(item.0)));
        let y = Accessor::from_fn(|item: &(i32, usize)| Datum::Number(item.1 as f64));
        let items: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();

        let coordinates = transform_series(&items, &x, &y, false);
        prop_assert_eq!(coordinates.len(), items.len());
        for pair in coordinates.windows(2) {
            let left = pair[0].x.as_number().unwrap_or(f64::NAN);
            let right = pair[1].x.as_number().unwrap_or(f64::NAN);
            prop_assert!(left <= right);
            if left == right {
                prop_assert!(pair[0].source_index < pair[1].source_index);
            }
        }
    }

    #[test]
    fn window_matches_linear_reference(
        xs in prop::collection::vec(-100i32..100, 0..48),
        a in -120i32..120,
        span in 0i32..80,
    ) {
        let data = sorted_series(&xs);
        let (low, high) = (f64::from(a), f64::from(a + span));

        let fast = window(&data, low, high, false);
        prop_assert_eq!(fast.to_vec(), window_linear(&data, low, high, false));

        if data.len() > 1 {
            let outside = fast
                .iter()
                .filter(|c| {
                    let x = c.x.as_number().unwrap_or(f64::NAN);
                    x < low || x > high
                })
                .count();
            prop_assert!(outside <= 2);
        }
    }

    #[test]
    fn nearest_is_never_beaten(
        xs in prop::collection::vec(-1000i32..1000, 1..48),
        query in -1200.0f64..1200.0,
    ) {
        let data = sorted_series(&xs);
        let index = nearest_index(&data, query, false).expect("non-empty numeric series");
        let distance = |i: usize| (data[i].x.as_number().unwrap_or(f64::NAN) - query).abs();

        let best = distance(index);
        for other in 0..data.len() {
            prop_assert!(best <= distance(other));
            if distance(other) == best {
                prop_assert!(index <= other);
            }
        }
    }

    #[test]
    fn extent_bounds_every_finite_value(
        values in prop::collection::vec(prop::option::of(-1e6f64..1e6), 0..64),
    ) {
        let data: Vec<Datum> = values.iter().copied().map(Datum::from).collect();
        let result = extent([data.as_slice()]);

        match result.as_pair() {
            Some((min, max)) => {
                prop_assert!(min <= max);
                for value in values.iter().flatten() {
                    prop_assert!(min <= *value && *value <= max);
                }
            }
            None => prop_assert!(values.iter().all(Option::is_none)),
        }
        prop_assert!(categories([data.as_slice()]).len() <= data.len());
    }

    #[test]
    fn push_never_moves_inward(
        mins in prop::collection::vec(-500.0f64..500.0, 1..32),
        push_tick in any::<bool>(),
    ) {
        let mode = if push_tick { RangeMode::PushTick } else { RangeMode::Push };
        let context = RangeContext {
            scale_kind: ScaleKind::Linear,
            params: ScaleParams::default(),
            tick_count: 5,
        };
        let mut range = AxisRange::new(AxisEdge::Min, mode);

        let mut previous = range.value();
        for min in mins {
            let value = range.recompute(xygraph_rs::core::Extent::new(min, 600.0), &context);
            prop_assert!(value <= previous);
            prop_assert!(value <= min.max(previous));
            previous = value;
        }
    }
}
