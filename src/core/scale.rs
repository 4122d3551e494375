use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Datum;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_POWER_EXPONENT: f64 = 3.0;
pub const DEFAULT_LOG_MIN: f64 = 0.1;
pub const DEFAULT_ORDINAL_PADDING: f64 = 0.1;
pub const DEFAULT_ORDINAL_OUTER_PADDING: f64 = 0.1;

/// Kind of mapping an axis uses from domain values to pixels.
///
/// Deserialization is lenient: unknown names fall back to `Linear` with a
/// warning, the same as [`ScaleKind::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
    Power,
    Ordinal,
}

impl ScaleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Power => "power",
            Self::Ordinal => "ordinal",
        }
    }

    #[must_use]
    pub const fn is_ordinal(self) -> bool {
        matches!(self, Self::Ordinal)
    }

    /// Parses a scale name, degrading unknown names to `Linear`.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ChartError| {
            warn!(error = %err, "falling back to linear scale");
            Self::Linear
        })
    }
}

impl FromStr for ScaleKind {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            "power" | "pow" => Ok(Self::Power),
            "ordinal" => Ok(Self::Ordinal),
            _ => Err(ChartError::UnknownScaleKind(name.to_owned())),
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ScaleKind {
    fn from(name: String) -> Self {
        Self::resolve(&name)
    }
}

impl From<ScaleKind> for &'static str {
    fn from(kind: ScaleKind) -> Self {
        kind.as_str()
    }
}

/// Scale-specific tuning shared by all kinds; each kind reads what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    #[serde(default = "default_power_exponent")]
    pub power_exponent: f64,
    #[serde(default = "default_log_min")]
    pub log_min: f64,
    /// Gap between ordinal bands, as a fraction of the band step.
    #[serde(default = "default_ordinal_padding")]
    pub ordinal_padding: f64,
    /// Gap before the first and after the last band, as a fraction of the step.
    #[serde(default = "default_ordinal_outer_padding")]
    pub ordinal_outer_padding: f64,
    /// Snap band starts and widths to whole pixels.
    #[serde(default = "default_round_bands")]
    pub round_bands: bool,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            power_exponent: default_power_exponent(),
            log_min: default_log_min(),
            ordinal_padding: default_ordinal_padding(),
            ordinal_outer_padding: default_ordinal_outer_padding(),
            round_bands: default_round_bands(),
        }
    }
}

impl ScaleParams {
    #[must_use]
    pub fn with_power_exponent(mut self, power_exponent: f64) -> Self {
        self.power_exponent = power_exponent;
        self
    }

    #[must_use]
    pub fn with_log_min(mut self, log_min: f64) -> Self {
        self.log_min = log_min;
        self
    }

    #[must_use]
    pub fn with_ordinal_padding(mut self, inner: f64, outer: f64) -> Self {
        self.ordinal_padding = inner;
        self.ordinal_outer_padding = outer;
        self
    }

    #[must_use]
    pub fn with_round_bands(mut self, round_bands: bool) -> Self {
        self.round_bands = round_bands;
        self
    }

    /// Positive log floor, falling back to the default for unusable values.
    #[must_use]
    pub fn effective_log_min(self) -> f64 {
        if self.log_min.is_finite() && self.log_min > 0.0 {
            self.log_min
        } else {
            DEFAULT_LOG_MIN
        }
    }

    #[must_use]
    pub fn effective_power_exponent(self) -> f64 {
        if self.power_exponent.is_finite() {
            self.power_exponent
        } else {
            DEFAULT_POWER_EXPONENT
        }
    }
}

fn default_power_exponent() -> f64 {
    DEFAULT_POWER_EXPONENT
}

fn default_log_min() -> f64 {
    DEFAULT_LOG_MIN
}

fn default_ordinal_padding() -> f64 {
    DEFAULT_ORDINAL_PADDING
}

fn default_ordinal_outer_padding() -> f64 {
    DEFAULT_ORDINAL_OUTER_PADDING
}

fn default_round_bands() -> bool {
    true
}

/// Replaces non-positive (or NaN) log-domain bounds with `log_min`.
#[must_use]
pub fn floor_log_domain(domain: (f64, f64), log_min: f64) -> (f64, f64) {
    let floor = |bound: f64| if bound > 0.0 { bound } else { log_min };
    (floor(domain.0), floor(domain.1))
}

/// Clamped interpolating scale for the linear, power and log kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
    exponent: f64,
    transformed: (f64, f64),
}

impl ContinuousScale {
    /// Builds a continuous scale; `Ordinal` is treated as `Linear`.
    #[must_use]
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64), params: ScaleParams) -> Self {
        let kind = if kind.is_ordinal() {
            ScaleKind::Linear
        } else {
            kind
        };
        let domain = if kind == ScaleKind::Log {
            floor_log_domain(domain, params.effective_log_min())
        } else {
            domain
        };
        let exponent = params.effective_power_exponent();
        let transformed = (
            warp(kind, exponent, domain.0),
            warp(kind, exponent, domain.1),
        );

        Self {
            kind,
            domain,
            range,
            exponent,
            transformed,
        }
    }

    #[must_use]
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::new(ScaleKind::Linear, domain, range, ScaleParams::default())
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    /// Domain the scale was built over, after log flooring.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value to pixels.
    ///
    /// Inputs past the domain clamp to the nearest range end; on a log scale
    /// that includes zero and negative values, which land on the low end of
    /// the domain. NaN maps to `None`. A zero-width domain maps everything to
    /// the range start.
    #[must_use]
    pub fn map(self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let warped = if self.kind == ScaleKind::Log && value <= 0.0 {
            f64::NEG_INFINITY
        } else {
            warp(self.kind, self.exponent, value)
        };
        let (t0, t1) = self.transformed;
        let span = t1 - t0;
        let ratio = if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            (warped - t0) / span
        };
        if ratio.is_nan() {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        Some(self.range.0 + ratio * (self.range.1 - self.range.0))
    }

    /// Maps a pixel back into the domain, clamped to the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<f64> {
        if !pixel.is_finite() {
            return None;
        }
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let ratio = if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            ((pixel - r0) / span).clamp(0.0, 1.0)
        };
        let (t0, t1) = self.transformed;
        let value = unwarp(self.kind, self.exponent, t0 + ratio * (t1 - t0));
        (!value.is_nan()).then_some(value)
    }
}

fn warp(kind: ScaleKind, exponent: f64, value: f64) -> f64 {
    match kind {
        ScaleKind::Log => value.log10(),
        ScaleKind::Power => value.signum() * value.abs().powf(exponent),
        ScaleKind::Linear | ScaleKind::Ordinal => value,
    }
}

fn unwarp(kind: ScaleKind, exponent: f64, value: f64) -> f64 {
    match kind {
        ScaleKind::Log => 10_f64.powf(value),
        ScaleKind::Power => value.signum() * value.abs().powf(exponent.recip()),
        ScaleKind::Linear | ScaleKind::Ordinal => value,
    }
}

/// Pixel band occupied by one ordinal category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f64,
    pub width: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.start + self.width * 0.5
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.width
    }
}

/// Banded scale over a finite, ordered set of categories.
///
/// Not arithmetically invertible; pixel lookups go through
/// [`crate::core::range_fraction`] and the ordinal nearest-point path.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    categories: IndexSet<String>,
    range: (f64, f64),
    starts: Vec<f64>,
    step: f64,
    band_width: f64,
}

impl OrdinalScale {
    #[must_use]
    pub fn new<I, S>(categories: I, range: (f64, f64), params: ScaleParams) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: IndexSet<String> = categories.into_iter().map(Into::into).collect();
        let padding = sanitize_padding(params.ordinal_padding);
        let outer_padding = sanitize_padding(params.ordinal_outer_padding);
        let count = categories.len() as f64;

        let reverse = range.1 < range.0;
        let (low, high) = if reverse {
            (range.1, range.0)
        } else {
            range
        };
        let denominator = count - padding + 2.0 * outer_padding;
        let raw_step = if categories.is_empty() || denominator <= 0.0 {
            0.0
        } else {
            (high - low) / denominator
        };

        let (step, first_start, band_width) = if params.round_bands {
            let step = raw_step.floor();
            let leftover = high - low - (count - padding) * step;
            (step, low + (leftover / 2.0).round(), (step * (1.0 - padding)).round())
        } else {
            (raw_step, low + raw_step * outer_padding, raw_step * (1.0 - padding))
        };

        let mut starts: Vec<f64> = (0..categories.len())
            .map(|index| first_start + step * index as f64)
            .collect();
        if reverse {
            starts.reverse();
        }

        Self {
            categories,
            range,
            starts,
            step,
            band_width,
        }
    }

    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn index_of(&self, value: &Datum) -> Option<usize> {
        self.categories.get_index_of(&value.category_key())
    }

    #[must_use]
    pub fn band_at(&self, index: usize) -> Option<Band> {
        self.starts.get(index).map(|&start| Band {
            start,
            width: self.band_width,
        })
    }

    /// Band for a category; unknown categories have none.
    #[must_use]
    pub fn band(&self, value: &Datum) -> Option<Band> {
        self.index_of(value).and_then(|index| self.band_at(index))
    }
}

fn sanitize_padding(padding: f64) -> f64 {
    if padding.is_finite() {
        padding.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Domain handed to [`build_scale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaleDomain {
    Continuous(f64, f64),
    Ordinal(Vec<String>),
}

/// Domain-to-pixel mapping for one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Continuous(ContinuousScale),
    Ordinal(OrdinalScale),
}

impl Scale {
    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Continuous(scale) => scale.kind(),
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Continuous(scale) => scale.range(),
            Self::Ordinal(scale) => scale.range(),
        }
    }

    #[must_use]
    pub fn is_invertible(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }

    /// Maps a datum to a pixel; ordinal scales return the band start.
    #[must_use]
    pub fn map(&self, value: &Datum) -> Option<f64> {
        match self {
            Self::Continuous(scale) => value.as_number().and_then(|number| scale.map(number)),
            Self::Ordinal(scale) => scale.band(value).map(|band| band.start),
        }
    }

    /// Pixel a marker for `value` is drawn at: the band centre on ordinal scales.
    #[must_use]
    pub fn position(&self, value: &Datum) -> Option<f64> {
        match self {
            Self::Continuous(scale) => value.as_number().and_then(|number| scale.map(number)),
            Self::Ordinal(scale) => scale.band(value).map(Band::center),
        }
    }

    /// Pixel back to domain value; always `None` for ordinal scales.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> Option<f64> {
        match self {
            Self::Continuous(scale) => scale.invert(pixel),
            Self::Ordinal(_) => None,
        }
    }

    #[must_use]
    pub fn band(&self, value: &Datum) -> Option<Band> {
        match self {
            Self::Continuous(_) => None,
            Self::Ordinal(scale) => scale.band(value),
        }
    }

    #[must_use]
    pub fn continuous_domain(&self) -> Option<(f64, f64)> {
        match self {
            Self::Continuous(scale) => Some(scale.domain()),
            Self::Ordinal(_) => None,
        }
    }

    #[must_use]
    pub fn as_continuous(&self) -> Option<ContinuousScale> {
        match self {
            Self::Continuous(scale) => Some(*scale),
            Self::Ordinal(_) => None,
        }
    }

    #[must_use]
    pub fn as_ordinal(&self) -> Option<&OrdinalScale> {
        match self {
            Self::Continuous(_) => None,
            Self::Ordinal(scale) => Some(scale),
        }
    }
}

/// Builds the scale for `kind` over `domain` and the pixel `range`.
///
/// The domain shape wins when it disagrees with `kind`: a continuous domain
/// under `Ordinal` builds a linear scale and vice versa, with a warning.
#[must_use]
pub fn build_scale(
    kind: ScaleKind,
    domain: ScaleDomain,
    range: (f64, f64),
    params: ScaleParams,
) -> Scale {
    match domain {
        ScaleDomain::Continuous(start, end) => {
            if kind.is_ordinal() {
                warn!("ordinal scale requested over a continuous domain; using linear");
            }
            Scale::Continuous(ContinuousScale::new(kind, (start, end), range, params))
        }
        ScaleDomain::Ordinal(categories) => {
            if !kind.is_ordinal() {
                warn!(%kind, "category domain forces an ordinal scale");
            }
            Scale::Ordinal(OrdinalScale::new(categories, range, params))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_bands_center_leftover_space() {
        let params = ScaleParams::default().with_ordinal_padding(0.0, 0.0);
        let scale = OrdinalScale::new(["a", "b", "c"], (0.0, 100.0), params);
        assert_eq!(scale.step(), 33.0);
        assert_eq!(scale.band_width(), 33.0);
        assert_eq!(scale.band_at(0).map(|band| band.start), Some(1.0));
    }

    #[test]
    fn empty_category_set_has_no_bands() {
        let scale = OrdinalScale::new(Vec::<String>::new(), (0.0, 100.0), ScaleParams::default());
        assert!(scale.is_empty());
        assert_eq!(scale.band_at(0), None);
    }
}
