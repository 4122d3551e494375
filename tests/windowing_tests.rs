use xygraph_rs::core::{
    Coordinate, first_visible, last_visible, window, window_bounds, window_linear,
};

fn series(xs: &[f64]) -> Vec<Coordinate> {
    xs.iter()
        .enumerate()
        .map(|(index, &x)| Coordinate::new(x, x * 10.0, index))
        .collect()
}

fn xs_of(coordinates: &[Coordinate]) -> Vec<f64> {
    coordinates
        .iter()
        .map(|c| c.x.as_number().unwrap_or(f64::NAN))
        .collect()
}

fn ramp() -> Vec<Coordinate> {
    series(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0])
}

#[test]
fn window_keeps_one_boundary_point_on_each_side() {
    let data = ramp();
    assert_eq!(
        xs_of(window(&data, 2.5, 5.5, false)),
        vec![2.0, 3.0, 4.0, 5.0, 6.0]
    );
}

#[test]
fn window_bounds_are_inclusive() {
    let data = ramp();
    assert_eq!(
        xs_of(window(&data, 3.0, 5.0, false)),
        vec![2.0, 3.0, 4.0, 5.0, 6.0]
    );
    assert_eq!(window_bounds(&data, 3.0, 5.0, false), 2..7);
}

#[test]
fn window_clips_at_series_ends() {
    let data = ramp();
    assert_eq!(xs_of(window(&data, 8.5, 20.0, false)), vec![8.0, 9.0, 10.0]);
    assert_eq!(xs_of(window(&data, -4.0, 0.5, false)), vec![0.0, 1.0]);
    assert_eq!(window(&data, -100.0, 100.0, false).len(), data.len());
}

#[test]
fn window_without_points_in_range_is_empty() {
    let data = ramp();
    assert!(window(&data, 3.2, 3.8, false).is_empty());
    assert!(window(&data, 20.0, 30.0, false).is_empty());
}

#[test]
fn window_rejects_reversed_and_nan_domains() {
    let data = ramp();
    assert!(window(&data, 6.0, 2.0, false).is_empty());
    assert!(window(&data, f64::NAN, 5.0, false).is_empty());
}

#[test]
fn single_point_and_ordinal_series_are_returned_whole() {
    let single = series(&[5.0]);
    assert_eq!(window(&single, 100.0, 200.0, false).len(), 1);

    let ordinal = vec![
        Coordinate::new("b", 1.0, 0),
        Coordinate::new("a", 2.0, 1),
        Coordinate::new("c", 3.0, 2),
    ];
    assert_eq!(window(&ordinal, 0.0, 0.0, true), ordinal.as_slice());
}

#[test]
fn fast_window_matches_linear_definition() {
    let data = series(&[-3.0, -1.0, -1.0, 0.5, 2.0, 2.0, 7.0, 11.0]);
    for (low, high) in [(-2.0, 1.0), (-1.0, -1.0), (2.0, 2.0), (3.0, 6.9), (-10.0, 20.0)] {
        assert_eq!(
            window(&data, low, high, false).to_vec(),
            window_linear(&data, low, high, false),
            "domain [{low}, {high}]"
        );
    }
}

#[test]
fn first_and_last_visible_skip_boundary_points() {
    let data = ramp();
    let rendered = window(&data, 2.5, 5.5, false);

    let first = first_visible(rendered, 2.5).expect("first visible");
    let last = last_visible(rendered, 5.5).expect("last visible");
    assert_eq!(first.x.as_number(), Some(3.0));
    assert_eq!(last.x.as_number(), Some(5.0));
    assert_eq!(first.source_index, 3);
}

#[test]
fn visible_points_keep_lone_boundary_point() {
    let data = series(&[1.0]);
    assert_eq!(
        first_visible(&data, 5.0).and_then(|c| c.x.as_number()),
        Some(1.0)
    );
    assert_eq!(
        last_visible(&data, 0.0).and_then(|c| c.x.as_number()),
        Some(1.0)
    );
    assert!(first_visible(&[], 0.0).is_none());
}
