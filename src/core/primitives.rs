use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Decimal as a plottable number; `None` when it has no finite f64 form.
#[must_use]
pub fn decimal_to_number(value: Decimal) -> Option<f64> {
    value.to_f64().filter(|number| number.is_finite())
}

/// Timestamp as fractional unix seconds, kept to millisecond precision.
#[must_use]
pub fn timestamp_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inclusive range test that is `false` for NaN on any side.
#[must_use]
pub(crate) fn between(value: f64, low: f64, high: f64) -> bool {
    low <= value && value <= high
}
