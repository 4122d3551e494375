use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::axis_range::AxisEdge;
use crate::core::primitives::{decimal_to_number, timestamp_seconds};

/// Value extracted from a data object by an accessor.
///
/// `Undefined` is propagated as-is through the pipeline; it is never coerced
/// to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Datum {
    #[default]
    Undefined,
    Number(f64),
    Category(String),
}

impl Datum {
    /// Maps a JSON value the way accessors see it.
    ///
    /// Booleans become `1`/`0`; arrays, objects and `null` are `Undefined`.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Undefined, Self::Number),
            Value::Bool(flag) => Self::Number(if *flag { 1.0 } else { 0.0 }),
            Value::String(text) => Self::Category(text.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Undefined,
        }
    }

    /// Returns the numeric payload, including non-finite values.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload only when it is finite.
    #[must_use]
    pub fn as_finite(&self) -> Option<f64> {
        self.as_number().filter(|value| value.is_finite())
    }

    /// `true` for numbers that take part in ordered comparisons (everything but NaN).
    #[must_use]
    pub fn is_comparable_number(&self) -> bool {
        matches!(self, Self::Number(value) if !value.is_nan())
    }

    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Key used to identify ordinal categories.
    #[must_use]
    pub fn category_key(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_owned(),
            Self::Number(value) => format!("{value}"),
            Self::Category(text) => text.clone(),
        }
    }

    /// Three-way comparator used to sort continuous series by x.
    ///
    /// Order: comparable numbers ascending (`-0.0 == 0.0`), then categories
    /// lexicographically, then NaN and `Undefined`, which compare equal so a
    /// stable sort keeps their input order.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) if !left.is_nan() && !right.is_nan() => {
                left.partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Self::Category(left), Self::Category(right)) => left.cmp(right),
            _ => self.sort_rank().cmp(&other.sort_rank()),
        }
    }

    fn sort_rank(&self) -> u8 {
        match self {
            Self::Number(value) if !value.is_nan() => 0,
            Self::Category(_) => 1,
            Self::Number(_) | Self::Undefined => 2,
        }
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Category(value.to_owned())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl From<Option<f64>> for Datum {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::Number)
    }
}

impl From<Decimal> for Datum {
    fn from(value: Decimal) -> Self {
        decimal_to_number(value).map_or(Self::Undefined, Self::Number)
    }
}

impl From<DateTime<Utc>> for Datum {
    fn from(time: DateTime<Utc>) -> Self {
        Self::Number(timestamp_seconds(time))
    }
}

/// One mapped data object.
///
/// `source_index` is the object's position in the original input array and
/// survives sorting; the owning series resolves it back to the object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: Datum,
    pub y: Datum,
    pub source_index: usize,
}

impl Coordinate {
    #[must_use]
    pub fn new(x: impl Into<Datum>, y: impl Into<Datum>, source_index: usize) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            source_index,
        }
    }
}

/// `(min, max)` over the finite numbers of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Extent {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn edge(self, edge: AxisEdge) -> Option<f64> {
        match edge {
            AxisEdge::Min => self.min,
            AxisEdge::Max => self.max,
        }
    }

    #[must_use]
    pub fn as_pair(self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }
}
