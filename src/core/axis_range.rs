use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::nice::nice_domain;
use crate::core::scale::floor_log_domain;
use crate::core::{Extent, ScaleKind, ScaleParams};
use crate::error::{ChartError, ChartResult};

/// Which end of an axis a range controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisEdge {
    Min,
    Max,
}

impl AxisEdge {
    /// Value `Auto` mode falls back to when the extent edge is absent or zero.
    #[must_use]
    pub const fn fallback(self) -> f64 {
        match self {
            Self::Min => 0.0,
            Self::Max => 1.0,
        }
    }

    /// `true` when `candidate` lies beyond `current` away from the axis centre.
    #[must_use]
    pub fn is_outward(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Min => candidate < current,
            Self::Max => candidate > current,
        }
    }
}

/// Autoranging policy for one axis end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeMode {
    /// Always the live data extent edge.
    #[default]
    Auto,
    /// Only explicit assignment changes the value.
    Fixed,
    /// Moves outward to the data extent edge, never back in.
    Push,
    /// Moves outward like `Push`, landing on a nice tick boundary.
    PushTick,
}

impl RangeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fixed => "fixed",
            Self::Push => "push",
            Self::PushTick => "push-tick",
        }
    }
}

impl FromStr for RangeMode {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "fixed" => Ok(Self::Fixed),
            "push" => Ok(Self::Push),
            "push-tick" => Ok(Self::PushTick),
            _ => Err(ChartError::UnknownRangeMode(name.to_owned())),
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis settings a range recompute depends on besides the extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeContext {
    pub scale_kind: ScaleKind,
    pub params: ScaleParams,
    pub tick_count: usize,
}

/// Stateful value for one axis end.
///
/// `Fixed`, `Push` and `PushTick` keep their value between recomputes; the
/// value only changes through [`AxisRange::assign`] or an outward data move.
/// `Auto` has no memory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    edge: AxisEdge,
    mode: RangeMode,
    current: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(edge: AxisEdge, mode: RangeMode) -> Self {
        Self {
            edge,
            mode,
            current: 0.0,
        }
    }

    #[must_use]
    pub fn edge(self) -> AxisEdge {
        self.edge
    }

    #[must_use]
    pub fn mode(self) -> RangeMode {
        self.mode
    }

    /// Last settled value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.current
    }

    pub fn set_mode(&mut self, mode: RangeMode) {
        self.mode = mode;
    }

    /// Overwrites the value regardless of mode; it becomes the push baseline.
    pub fn assign(&mut self, value: f64) {
        self.current = value;
    }

    /// Applies the mode's policy to a fresh extent and returns the new value.
    pub fn recompute(&mut self, extent: Extent, context: &RangeContext) -> f64 {
        let previous = self.current;
        let edge_value = extent.edge(self.edge);

        match self.mode {
            RangeMode::Auto => {
                self.current = edge_value
                    .filter(|value| *value != 0.0)
                    .unwrap_or_else(|| self.edge.fallback());
            }
            RangeMode::Fixed => {}
            RangeMode::Push => {
                if let Some(value) = self.outward_edge(edge_value) {
                    self.current = value;
                }
            }
            RangeMode::PushTick => {
                if let Some(value) = self.outward_edge(edge_value) {
                    self.current = self.nice_edge(extent, context).unwrap_or(value);
                }
            }
        }

        if self.current != previous {
            trace!(
                edge = ?self.edge,
                mode = %self.mode,
                previous,
                current = self.current,
                "axis range moved"
            );
        }
        self.current
    }

    fn outward_edge(self, edge_value: Option<f64>) -> Option<f64> {
        edge_value.filter(|value| value.is_finite() && self.edge.is_outward(*value, self.current))
    }

    fn nice_edge(self, extent: Extent, context: &RangeContext) -> Option<f64> {
        let mut domain = extent.as_pair()?;
        if context.scale_kind == ScaleKind::Log {
            domain = floor_log_domain(domain, context.params.effective_log_min());
        }
        let (low, high) = nice_domain(context.scale_kind, domain, context.tick_count);
        let value = match self.edge {
            AxisEdge::Min => low,
            AxisEdge::Max => high,
        };
        value.is_finite().then_some(value)
    }
}
