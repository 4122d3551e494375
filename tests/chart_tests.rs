use serde_json::{Value, json};
use xygraph_rs::api::{AxisConfig, RecomputeStats, SeriesSource, XAxisOrient, YAxisOrient};
use xygraph_rs::core::{Accessor, AxisEdge, Datum, Extent, RangeMode, ScaleDomain, ScaleKind};
use xygraph_rs::{Axis, Chart, ChartConfig, ChartError, ChartLayout};

/// `{x: i, y: i * 10}` for `i` in `0..=last`.
fn ramp(last: i64) -> Vec<Value> {
    (0..=last).map(|i| json!({ "x": i, "y": i * 10 })).collect()
}

fn chart(config: ChartConfig) -> Chart {
    Chart::new(config).expect("valid config")
}

#[test]
fn auto_axes_follow_the_aggregated_extent() {
    let mut chart = chart(ChartConfig::default());
    let ids: Vec<_> = (0..3).map(|_| chart.add_json_line(ramp(10))).collect();

    assert_eq!(chart.extent(Axis::X), Extent::new(0.0, 10.0));
    assert_eq!(chart.x_min(), 0.0);
    assert_eq!(chart.x_max(), 10.0);
    assert_eq!(chart.y_max(), 100.0);

    chart
        .set_graphic_data(ids[1], ramp(4))
        .expect("known graphic");
    assert_eq!(chart.x_min(), 0.0);
    assert_eq!(chart.x_max(), 10.0);

    for id in &ids {
        chart.set_graphic_data(*id, ramp(6)).expect("known graphic");
    }
    assert_eq!(chart.x_min(), 0.0);
    assert_eq!(chart.x_max(), 6.0);
    assert_eq!(chart.y_max(), 60.0);
}

#[test]
fn empty_chart_uses_fallback_range() {
    let mut chart = chart(ChartConfig::default());
    assert!(!chart.has_data());
    assert!(chart.extent(Axis::Y).is_empty());
    assert_eq!(chart.domain(Axis::X), ScaleDomain::Continuous(0.0, 1.0));
}

#[test]
fn derived_values_recompute_only_after_input_changes() {
    let mut chart = chart(ChartConfig::default());
    let _a = chart.add_json_line(ramp(10));
    let b = chart.add_json_line(ramp(10));
    assert_eq!(chart.recompute_stats(), RecomputeStats::default());

    chart.x_min();
    let settled = chart.recompute_stats();
    assert_eq!(settled.sorted_series, 2);
    assert_eq!(settled.extents, 1);
    assert_eq!(settled.ranges, 2);

    chart.x_max();
    chart.extent(Axis::X);
    assert_eq!(chart.recompute_stats(), settled);

    // Same extent, different order: series and extent rerun, ranges do not.
    let mut reversed = ramp(10);
    reversed.reverse();
    chart.set_graphic_data(b, reversed).expect("known graphic");
    assert_eq!(chart.recompute_stats(), settled);

    chart.x_max();
    let after = chart.recompute_stats();
    assert_eq!(after.sorted_series, settled.sorted_series + 1);
    assert_eq!(after.extents, settled.extents + 1);
    assert_eq!(after.ranges, settled.ranges);

    chart.set_graphic_data(b, ramp(20)).expect("known graphic");
    assert_eq!(chart.x_max(), 20.0);
    assert_eq!(chart.recompute_stats().ranges, settled.ranges + 2);
}

#[test]
fn rendered_window_is_memoized_per_domain() {
    let mut chart = chart(ChartConfig::default());
    let id = chart.add_json_line(ramp(10));

    assert_eq!(chart.rendered_series(id).map(<[_]>::len), Some(11));
    assert_eq!(chart.rendered_series(id).map(<[_]>::len), Some(11));
    assert_eq!(chart.recompute_stats().rendered_windows, 1);

    chart.set_axis_mode(Axis::X, AxisEdge::Min, RangeMode::Fixed);
    chart.set_axis_mode(Axis::X, AxisEdge::Max, RangeMode::Fixed);
    chart.set_x_min(2.5);
    chart.set_x_max(5.5);
    let xs: Vec<f64> = chart
        .rendered_series(id)
        .expect("registered")
        .iter()
        .filter_map(|c| c.x.as_number())
        .collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(chart.recompute_stats().rendered_windows, 2);

    let first = chart.first_visible(id).and_then(|c| c.x.as_number());
    let last = chart.last_visible(id).and_then(|c| c.x.as_number());
    assert_eq!((first, last), (Some(3.0), Some(5.0)));
}

#[test]
fn push_axis_never_shrinks() {
    let config = ChartConfig::default()
        .with_y_axis(AxisConfig::default().with_modes(RangeMode::Push, RangeMode::Push));
    let mut chart = chart(config);
    let id = chart.add_json_line(ramp(10));

    assert_eq!(chart.y_min(), 0.0);
    assert_eq!(chart.y_max(), 100.0);

    chart.set_graphic_data(id, ramp(5)).expect("known graphic");
    assert_eq!(chart.y_max(), 100.0);

    chart.set_graphic_data(id, ramp(12)).expect("known graphic");
    assert_eq!(chart.y_max(), 120.0);
}

#[test]
fn assigned_value_holds_until_inputs_change() {
    let mut chart = chart(ChartConfig::default());
    let id = chart.add_json_line(ramp(10));
    assert_eq!(chart.x_max(), 10.0);

    chart.set_x_max(42.0);
    assert_eq!(chart.x_max(), 42.0);
    assert_eq!(chart.x_max(), 42.0);

    chart.set_graphic_data(id, ramp(7)).expect("known graphic");
    assert_eq!(chart.x_max(), 7.0);
}

#[test]
fn fixed_axis_uses_assigned_bounds() {
    let config = ChartConfig::default()
        .with_x_axis(AxisConfig::default().with_modes(RangeMode::Fixed, RangeMode::Fixed));
    let mut chart = chart(config);
    chart.add_json_line(ramp(10));

    assert_eq!(chart.domain(Axis::X), ScaleDomain::Continuous(0.0, 0.0));
    chart.set_x_min(-5.0);
    chart.set_x_max(20.0);
    assert_eq!(chart.domain(Axis::X), ScaleDomain::Continuous(-5.0, 20.0));
}

#[test]
fn switching_to_push_keeps_the_current_value_as_baseline() {
    let mut chart = chart(ChartConfig::default());
    let id = chart.add_json_line(ramp(10));
    assert_eq!(chart.x_max(), 10.0);

    chart.set_axis_mode(Axis::X, AxisEdge::Max, RangeMode::Push);
    assert_eq!(chart.x_max(), 10.0);
    chart.set_graphic_data(id, ramp(5)).expect("known graphic");
    assert_eq!(chart.x_max(), 10.0);
    assert_eq!(chart.axis_config(Axis::X).max_mode, RangeMode::Push);
}

#[test]
fn push_tick_axis_rounds_outward() {
    let config = ChartConfig::default().with_y_axis(
        AxisConfig::default().with_modes(RangeMode::PushTick, RangeMode::PushTick),
    );
    let mut chart = chart(config);
    chart.add_json_line(vec![
        json!({ "x": 0, "y": -3.3 }),
        json!({ "x": 1, "y": 9.3 }),
    ]);

    assert_eq!(chart.y_min(), -4.0);
    assert_eq!(chart.y_max(), 10.0);
}

#[test]
fn log_axis_domain_is_floored() {
    let config = ChartConfig::default().with_y_axis(AxisConfig::new(ScaleKind::Log));
    let mut chart = chart(config);
    chart.add_json_line(ramp(10));

    assert_eq!(chart.y_min(), 0.0);
    assert_eq!(chart.domain(Axis::Y), ScaleDomain::Continuous(0.1, 100.0));
}

#[test]
fn ordinal_axis_collects_categories_in_first_seen_order() {
    let config = ChartConfig::default().with_x_axis(
        AxisConfig::new(ScaleKind::Ordinal)
            .with_params(xygraph_rs::core::ScaleParams::default().with_ordinal_padding(0.0, 0.0)),
    );
    let mut chart = chart(config);
    let first = chart.add_json_line(vec![
        json!({ "x": "b", "y": 1 }),
        json!({ "x": "a", "y": 2 }),
        json!({ "x": "b", "y": 3 }),
    ]);
    chart.add_json_line(vec![json!({ "x": "c", "y": 4 })]);

    assert_eq!(chart.categories(Axis::X), vec!["b", "a", "c"]);
    assert_eq!(
        chart.domain(Axis::X),
        ScaleDomain::Ordinal(vec!["b".to_owned(), "a".to_owned(), "c".to_owned()])
    );
    let band = chart.scale(Axis::X).band(&Datum::from("a"));
    assert_eq!(band.map(|band| band.start), Some(100.0));

    let xs: Vec<Datum> = chart
        .rendered_series(first)
        .expect("registered")
        .iter()
        .map(|c| c.x.clone())
        .collect();
    assert_eq!(xs, vec![Datum::from("b"), Datum::from("a"), Datum::from("b")]);

    let hit = chart.nearest_to_pixel(first, 250.0).map(|c| c.y.clone());
    assert_eq!(hit, Some(Datum::Number(3.0)));

    chart.pointer_move(120.0, 50.0);
    assert_eq!(chart.hover_x(), None);
    assert!(chart.hover_y().is_some());
}

#[test]
fn hover_inverts_pointer_through_scales() {
    let mut chart = chart(ChartConfig::default());
    let id = chart.add_json_line(ramp(10));

    assert_eq!(chart.hover().x, None);
    chart.pointer_move(150.0, 25.0);
    let hover = chart.hover();
    assert_eq!(hover.x, Some(5.0));
    assert_eq!(hover.y, Some(75.0));

    let hit = chart.nearest_to_pixel(id, 150.0).and_then(|c| c.x.as_number());
    assert_eq!(hit, Some(5.0));
    let near = chart.nearest(id, 6.4).map(|c| c.source_index);
    assert_eq!(near, Some(6));

    chart.pointer_leave();
    assert_eq!(chart.hover_x(), None);
    assert_eq!(chart.hover_y(), None);
}

#[test]
fn changing_accessors_reshapes_the_series() {
    let mut chart = chart(ChartConfig::default());
    let id = chart.add_json_line(ramp(10));
    assert_eq!(chart.x_max(), 10.0);

    chart.set_graphic_paths(id, "y", "x").expect("known graphic");
    assert_eq!(chart.x_max(), 100.0);
    assert_eq!(chart.y_max(), 10.0);

    chart
        .set_graphic_accessors(id, Accessor::from_path(""), Accessor::from_path("y"))
        .expect("known graphic");
    assert!(chart.extent(Axis::X).is_empty());
    assert_eq!(chart.x_max(), 1.0);
}

#[test]
fn custom_accessors_work_on_typed_data() {
    let mut chart: Chart<(f64, f64)> = chart_typed();
    let source = SeriesSource::new(
        vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)],
        Accessor::from_fn(|point: &(f64, f64)| Datum::Number(point.0)),
        Accessor::from_fn(|point: &(f64, f64)| Datum::Number(point.1)),
    );
    let id = chart.add_line(source);

    let series = chart.sorted_series(id).expect("registered");
    let first = &series.coordinates()[0];
    assert_eq!(series.source(first), Some(&(1.0, 10.0)));
    assert_eq!(chart.extent(Axis::Y), Extent::new(10.0, 30.0));
}

fn chart_typed() -> Chart<(f64, f64)> {
    Chart::new(ChartConfig::default()).expect("valid config")
}

#[test]
fn unregistering_a_graphic_shrinks_the_extent() {
    let mut chart = chart(ChartConfig::default());
    let small = chart.add_json_line(ramp(4));
    let large = chart.add_json_line(ramp(10));
    assert_eq!(chart.x_max(), 10.0);

    assert!(chart.unregister_graphic(large));
    assert!(!chart.unregister_graphic(large));
    assert_eq!(chart.x_max(), 4.0);
    assert_eq!(chart.graphic_ids(), vec![small]);

    assert!(matches!(
        chart.set_graphic_data(large, ramp(1)),
        Err(ChartError::InvalidData(_))
    ));
    assert!(chart.nearest(large, 1.0).is_none());
    assert!(chart.geometry(large).is_none());
}

#[test]
fn selection_follows_configured_mode() {
    let mut single = chart(ChartConfig::default());
    let a = single.add_json_line(ramp(1));
    let b = single.add_json_line(ramp(1));
    assert!(single.select_graphic(a));
    assert!(!single.select_graphic(a));
    assert!(single.select_graphic(b));
    assert_eq!(single.selected_graphics(), vec![b]);

    let mut multi = chart(ChartConfig::default().with_select_multiple(true));
    let a = multi.add_json_line(ramp(1));
    let b = multi.add_json_line(ramp(1));
    assert!(multi.select_graphic(a));
    assert!(multi.select_graphic(b));
    assert_eq!(multi.selected_graphics(), vec![a, b]);

    assert!(multi.deselect_graphic(a));
    assert!(!multi.deselect_graphic(a));
    assert!(multi.unregister_graphic(b));
    assert!(!multi.is_selected(b));
    assert!(!multi.select_graphic(b));

    let c = multi.add_json_line(ramp(1));
    assert!(multi.select_graphic(c));
    multi.clear_selection();
    assert!(multi.selected_graphics().is_empty());
    assert!(multi.select_graphic(c));
}

#[test]
fn layout_drives_ranges_and_axis_flags() {
    let layout = ChartLayout::new(300.0, 100.0)
        .with_x_axis(20.0, XAxisOrient::Bottom)
        .with_y_axis(40.0, YAxisOrient::Left);
    let mut chart = chart(ChartConfig::new(layout));
    assert!(chart.has_x_axis());
    assert!(chart.has_y_axis());
    assert_eq!(chart.graph_origin(), (40.0, 0.0));
    assert_eq!(chart.pixel_range(Axis::X), (0.0, 260.0));
    assert_eq!(chart.pixel_range(Axis::Y), (80.0, 0.0));
    assert_eq!(chart.scale(Axis::X).range(), (0.0, 260.0));

    chart
        .set_layout(layout.with_x_axis(20.0, XAxisOrient::Top))
        .expect("valid layout");
    assert_eq!(chart.graph_origin(), (40.0, 20.0));

    let plain = self::chart(ChartConfig::default());
    assert!(!plain.has_x_axis());
    assert!(!plain.has_y_axis());

    let override_range =
        ChartConfig::default().with_x_axis(AxisConfig::default().with_range(10.0, 50.0));
    let mut overridden = self::chart(override_range);
    assert_eq!(overridden.scale(Axis::X).range(), (10.0, 50.0));
}

#[test]
fn switching_scale_kind_rebuilds_the_scale() {
    let mut chart = chart(ChartConfig::default());
    chart.add_json_line(ramp(10));
    assert_eq!(chart.scale(Axis::Y).kind(), ScaleKind::Linear);

    chart
        .set_scale_kind(Axis::Y, ScaleKind::Power)
        .expect("valid axis config");
    assert_eq!(chart.scale(Axis::Y).kind(), ScaleKind::Power);
    assert_eq!(chart.axis_config(Axis::Y).scale_kind, ScaleKind::Power);

    let invalid = AxisConfig::default().with_params(
        xygraph_rs::core::ScaleParams::default().with_log_min(0.0),
    );
    assert!(chart.set_axis_config(Axis::Y, invalid).is_err());
    assert_eq!(chart.axis_config(Axis::Y).scale_kind, ScaleKind::Power);
}
