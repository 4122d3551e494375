use crate::core::{Datum, Extent};

/// Computes the extent of all finite numbers across several value arrays.
///
/// NaN, infinities, categories and `Undefined` are skipped here but stay in
/// the series they came from. No finite value at all yields
/// [`Extent::empty`].
#[must_use]
pub fn extent<'a, I>(series_values: I) -> Extent
where
    I: IntoIterator<Item = &'a [Datum]>,
{
    series_values
        .into_iter()
        .flat_map(|values| values.iter())
        .filter_map(Datum::as_finite)
        .fold(Extent::empty(), |acc, value| Extent {
            min: Some(acc.min.map_or(value, |min| min.min(value))),
            max: Some(acc.max.map_or(value, |max| max.max(value))),
        })
}

/// Distinct category keys in first-seen order across several value arrays.
///
/// This is the domain of an ordinal axis.
#[must_use]
pub fn categories<'a, I>(series_values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [Datum]>,
{
    let mut seen = indexmap::IndexSet::new();
    for value in series_values.into_iter().flat_map(|values| values.iter()) {
        seen.insert(value.category_key());
    }
    seen.into_iter().collect()
}
