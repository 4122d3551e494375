use std::ops::Range;

use crate::core::Coordinate;
use crate::core::primitives::between;

/// Selects the part of a sorted series needed to draw `[domain_min, domain_max]`.
///
/// Every coordinate with x inside the inclusive window is kept, plus the one
/// immediately before and the one immediately after so lines and areas reach
/// the plot edges. Ordinal series are returned whole, and a single-point
/// series is always kept.
///
/// The result is always a contiguous sub-slice of `series`.
#[must_use]
pub fn window(
    series: &[Coordinate],
    domain_min: f64,
    domain_max: f64,
    is_ordinal: bool,
) -> &[Coordinate] {
    &series[window_bounds(series, domain_min, domain_max, is_ordinal)]
}

/// Index range form of [`window`].
#[must_use]
pub fn window_bounds(
    series: &[Coordinate],
    domain_min: f64,
    domain_max: f64,
    is_ordinal: bool,
) -> Range<usize> {
    if is_ordinal || series.len() <= 1 {
        return 0..series.len();
    }
    if !(domain_min <= domain_max) {
        return 0..0;
    }

    // Only the leading numeric run can be in range; it is sorted ascending.
    let numeric_len = series.partition_point(|coordinate| coordinate.x.is_comparable_number());
    let numeric = &series[..numeric_len];
    let first_in = numeric.partition_point(|coordinate| x_of(coordinate) < domain_min);
    let past_last_in = numeric.partition_point(|coordinate| x_of(coordinate) <= domain_max);
    if first_in >= past_last_in {
        return 0..0;
    }

    first_in.saturating_sub(1)..(past_last_in + 1).min(series.len())
}

/// Reference form of [`window`]: one linear pass over neighbour tests.
///
/// Kept for property tests that pin the fast path to the plain definition.
#[must_use]
pub fn window_linear(
    series: &[Coordinate],
    domain_min: f64,
    domain_max: f64,
    is_ordinal: bool,
) -> Vec<Coordinate> {
    if is_ordinal || series.len() <= 1 {
        return series.to_vec();
    }

    let in_range = |coordinate: Option<&Coordinate>| {
        coordinate
            .and_then(|coordinate| coordinate.x.as_number())
            .is_some_and(|x| between(x, domain_min, domain_max))
    };

    series
        .iter()
        .enumerate()
        .filter(|(index, coordinate)| {
            in_range(Some(coordinate))
                || in_range(index.checked_sub(1).and_then(|prev| series.get(prev)))
                || in_range(series.get(index + 1))
        })
        .map(|(_, coordinate)| coordinate.clone())
        .collect()
}

/// First rendered coordinate that actually lies inside the domain.
///
/// Skips the leading boundary point when it falls left of `domain_min`.
#[must_use]
pub fn first_visible(rendered: &[Coordinate], domain_min: f64) -> Option<&Coordinate> {
    let first = rendered.first()?;
    let before_domain = first.x.as_number().is_some_and(|x| domain_min > x);
    if before_domain && rendered.len() > 1 {
        return rendered.get(1);
    }
    Some(first)
}

/// Last rendered coordinate that actually lies inside the domain.
#[must_use]
pub fn last_visible(rendered: &[Coordinate], domain_max: f64) -> Option<&Coordinate> {
    let last = rendered.last()?;
    let after_domain = last.x.as_number().is_some_and(|x| domain_max < x);
    if after_domain && rendered.len() > 1 {
        return rendered.get(rendered.len() - 2);
    }
    Some(last)
}

fn x_of(coordinate: &Coordinate) -> f64 {
    coordinate.x.as_number().unwrap_or(f64::NAN)
}
