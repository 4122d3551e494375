use crate::core::Coordinate;

/// Finds the coordinate closest to `query_x`.
///
/// Continuous series are binary-searched by x, so the input must be sorted the
/// way [`crate::core::transform_series`] sorts it. Of the two neighbours around
/// the insertion point the closer one wins, and on a tie the lower index wins.
///
/// For ordinal series `query_x` is a fraction of the pixel range, mapped to
/// `floor(fraction * len)` and clamped into the series.
#[must_use]
pub fn nearest(series: &[Coordinate], query_x: f64, is_ordinal: bool) -> Option<&Coordinate> {
    nearest_index(series, query_x, is_ordinal).and_then(|index| series.get(index))
}

/// Index form of [`nearest`].
#[must_use]
pub fn nearest_index(series: &[Coordinate], query_x: f64, is_ordinal: bool) -> Option<usize> {
    if series.is_empty() || !query_x.is_finite() {
        return None;
    }

    if is_ordinal {
        let last = (series.len() - 1) as f64;
        let raw = (query_x * series.len() as f64).floor();
        return Some(raw.clamp(0.0, last) as usize);
    }

    let numeric_len = series.partition_point(|coordinate| coordinate.x.is_comparable_number());
    if numeric_len == 0 {
        return None;
    }
    let numeric = &series[..numeric_len];
    let insertion = numeric.partition_point(|coordinate| x_of(coordinate) < query_x);

    if insertion == 0 {
        return Some(0);
    }
    if insertion < numeric_len {
        let left_distance = (query_x - x_of(&numeric[insertion - 1])).abs();
        let right_distance = (x_of(&numeric[insertion]) - query_x).abs();
        if right_distance < left_distance {
            return Some(insertion);
        }
    }

    // Left neighbour wins; report the first of its equal-x run.
    let left_x = x_of(&numeric[insertion - 1]);
    Some(numeric.partition_point(|coordinate| x_of(coordinate) < left_x))
}

/// Converts a pixel position into the fraction of `range` it covers.
///
/// Returns `None` for a zero-width range or non-finite input.
#[must_use]
pub fn range_fraction(pixel: f64, range: (f64, f64)) -> Option<f64> {
    let span = (range.1 - range.0).abs();
    if !pixel.is_finite() || !span.is_finite() || span == 0.0 {
        return None;
    }
    Some((pixel - range.0).abs() / span)
}

fn x_of(coordinate: &Coordinate) -> f64 {
    coordinate.x.as_number().unwrap_or(f64::NAN)
}
