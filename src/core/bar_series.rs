use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Scale};

/// Axis-aligned bar rectangle in pixel coordinates (`y` is the top edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub source_index: usize,
}

/// Projects a rendered series into bars standing on the y-range baseline.
///
/// On an ordinal x scale each bar fills its category band; on a continuous
/// one it is `continuous_width_px` wide and centred on the mapped x.
#[must_use]
pub fn project_bars(
    coordinates: &[Coordinate],
    x_scale: &Scale,
    y_scale: &Scale,
    continuous_width_px: f64,
) -> Vec<BarRect> {
    let width = if continuous_width_px.is_finite() {
        continuous_width_px.max(0.0)
    } else {
        0.0
    };
    let baseline_y = y_scale.range().0;

    coordinates
        .iter()
        .filter_map(|coordinate| {
            let (x, width) = match x_scale.band(&coordinate.x) {
                Some(band) => (band.start, band.width),
                None => (x_scale.position(&coordinate.x)? - width * 0.5, width),
            };
            let value_y = y_scale.position(&coordinate.y)?;
            Some(BarRect {
                x,
                y: value_y.min(baseline_y),
                width,
                height: (baseline_y - value_y).abs(),
                source_index: coordinate.source_index,
            })
        })
        .collect()
}
