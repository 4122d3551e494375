use std::fmt;
use std::sync::Arc;

use crate::core::{Accessor, Coordinate, Datum};

/// Maps raw items through both accessors and orders them for plotting.
///
/// Continuous axes get a stable ascending sort by x using [`Datum::sort_cmp`];
/// ordinal axes keep input order untouched.
#[must_use]
pub fn transform_series<T>(
    items: &[T],
    x_accessor: &Accessor<T>,
    y_accessor: &Accessor<T>,
    is_ordinal: bool,
) -> Vec<Coordinate> {
    let mut mapped: Vec<Coordinate> = items
        .iter()
        .enumerate()
        .map(|(source_index, item)| Coordinate {
            x: x_accessor.get(item),
            y: y_accessor.get(item),
            source_index,
        })
        .collect();

    if !is_ordinal {
        mapped.sort_by(|left, right| left.x.sort_cmp(&right.x));
    }
    mapped
}

/// Sorted coordinate sequence plus the flat per-axis value arrays.
///
/// `xs` and `ys` always have the same length and order as `coordinates`.
pub struct SortedSeries<T> {
    source: Arc<[T]>,
    coordinates: Vec<Coordinate>,
    xs: Vec<Datum>,
    ys: Vec<Datum>,
    numeric_len: usize,
    ordinal: bool,
}

impl<T> fmt::Debug for SortedSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedSeries")
            .field("len", &self.coordinates.len())
            .field("numeric_len", &self.numeric_len)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

impl<T> SortedSeries<T> {
    #[must_use]
    pub fn new(
        source: Arc<[T]>,
        x_accessor: &Accessor<T>,
        y_accessor: &Accessor<T>,
        is_ordinal: bool,
    ) -> Self {
        let coordinates = transform_series(&source, x_accessor, y_accessor, is_ordinal);
        let (xs, ys) = coordinates
            .iter()
            .map(|coordinate| (coordinate.x.clone(), coordinate.y.clone()))
            .unzip();
        let numeric_len = if is_ordinal {
            0
        } else {
            coordinates.partition_point(|coordinate| coordinate.x.is_comparable_number())
        };

        Self {
            source,
            coordinates,
            xs,
            ys,
            numeric_len,
            ordinal: is_ordinal,
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[must_use]
    pub fn xs(&self) -> &[Datum] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[Datum] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        self.ordinal
    }

    /// Length of the leading run whose x is a comparable number.
    ///
    /// Always `0` for ordinal series, which are not sorted.
    #[must_use]
    pub fn numeric_len(&self) -> usize {
        self.numeric_len
    }

    /// Resolves a coordinate back to the object it was mapped from.
    #[must_use]
    pub fn source(&self, coordinate: &Coordinate) -> Option<&T> {
        self.source.get(coordinate.source_index)
    }

    #[must_use]
    pub fn source_data(&self) -> &Arc<[T]> {
        &self.source
    }
}
