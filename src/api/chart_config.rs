use serde::{Deserialize, Serialize};

use crate::core::{RangeMode, ScaleKind, ScaleParams};
use crate::error::{ChartError, ChartResult};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Side of the plot the y axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxisOrient {
    #[default]
    Left,
    Right,
}

/// Side of the plot the x axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisOrient {
    Top,
    #[default]
    Bottom,
}

/// Outer chart box and the space reserved around the plot content.
///
/// An axis is considered present when its size is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub x_axis_height: Option<f64>,
    #[serde(default)]
    pub y_axis_width: Option<f64>,
    #[serde(default)]
    pub x_axis_orient: XAxisOrient,
    #[serde(default)]
    pub y_axis_orient: YAxisOrient,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            x_axis_height: None,
            y_axis_width: None,
            x_axis_orient: XAxisOrient::default(),
            y_axis_orient: YAxisOrient::default(),
        }
    }
}

impl ChartLayout {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.padding_top = top;
        self.padding_right = right;
        self.padding_bottom = bottom;
        self.padding_left = left;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, height: f64, orient: XAxisOrient) -> Self {
        self.x_axis_height = Some(height);
        self.x_axis_orient = orient;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, width: f64, orient: YAxisOrient) -> Self {
        self.y_axis_width = Some(width);
        self.y_axis_orient = orient;
        self
    }

    #[must_use]
    pub fn has_x_axis(self) -> bool {
        self.x_axis_height.is_some()
    }

    #[must_use]
    pub fn has_y_axis(self) -> bool {
        self.y_axis_width.is_some()
    }

    /// Width left for plot content; never negative.
    #[must_use]
    pub fn graph_width(self) -> f64 {
        let reserved =
            self.padding_left + self.padding_right + self.y_axis_width.unwrap_or_default();
        (self.width - reserved).max(0.0)
    }

    /// Height left for plot content; never negative.
    #[must_use]
    pub fn graph_height(self) -> f64 {
        let reserved =
            self.padding_top + self.padding_bottom + self.x_axis_height.unwrap_or_default();
        (self.height - reserved).max(0.0)
    }

    /// Top-left corner of the plot content inside the chart box.
    #[must_use]
    pub fn graph_origin(self) -> (f64, f64) {
        let x = match self.y_axis_orient {
            YAxisOrient::Left => self.padding_left + self.y_axis_width.unwrap_or_default(),
            YAxisOrient::Right => self.padding_left,
        };
        let y = match self.x_axis_orient {
            XAxisOrient::Top => self.padding_top + self.x_axis_height.unwrap_or_default(),
            XAxisOrient::Bottom => self.padding_top,
        };
        (x, y)
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.graph_width())
    }

    /// Pixel y grows downwards, so the domain minimum maps to the bottom.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.graph_height(), 0.0)
    }

    fn validate(self) -> ChartResult<Self> {
        let sizes = [
            ("width", self.width),
            ("height", self.height),
            ("padding_top", self.padding_top),
            ("padding_right", self.padding_right),
            ("padding_bottom", self.padding_bottom),
            ("padding_left", self.padding_left),
            ("x_axis_height", self.x_axis_height.unwrap_or_default()),
            ("y_axis_width", self.y_axis_width.unwrap_or_default()),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Per-axis scale and autoranging setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub scale_kind: ScaleKind,
    #[serde(default)]
    pub min_mode: RangeMode,
    #[serde(default)]
    pub max_mode: RangeMode,
    #[serde(default, flatten)]
    pub params: ScaleParams,
    /// Tick count hint for nice rounding; `None` or `0` uses the axis default.
    #[serde(default)]
    pub tick_count: Option<usize>,
    /// Explicit pixel range; defaults to the layout-derived range.
    #[serde(default)]
    pub range: Option<(f64, f64)>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            scale_kind: ScaleKind::Linear,
            min_mode: RangeMode::Auto,
            max_mode: RangeMode::Auto,
            params: ScaleParams::default(),
            tick_count: None,
            range: None,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn new(scale_kind: ScaleKind) -> Self {
        Self {
            scale_kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modes(mut self, min_mode: RangeMode, max_mode: RangeMode) -> Self {
        self.min_mode = min_mode;
        self.max_mode = max_mode;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: ScaleParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = Some(tick_count);
        self
    }

    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Effective tick count: the hint when set and non-zero, else `default`.
    #[must_use]
    pub fn resolved_tick_count(self, default: usize) -> usize {
        self.tick_count.filter(|count| *count > 0).unwrap_or(default)
    }

    fn validate(self, axis: &str) -> ChartResult<Self> {
        let params = self.params;
        if !params.power_exponent.is_finite() {
            return Err(ChartError::InvalidConfig(format!(
                "{axis} power exponent must be finite"
            )));
        }
        if !params.log_min.is_finite() || params.log_min <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{axis} log min must be finite and > 0"
            )));
        }
        for (name, padding) in [
            ("ordinal padding", params.ordinal_padding),
            ("ordinal outer padding", params.ordinal_outer_padding),
        ] {
            if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
                return Err(ChartError::InvalidConfig(format!(
                    "{axis} {name} must be within [0, 1]"
                )));
            }
        }
        if let Some((start, end)) = self.range {
            if !start.is_finite() || !end.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "{axis} range must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub x_axis: AxisConfig,
    #[serde(default)]
    pub y_axis: AxisConfig,
    /// Allow more than one graphic to be selected at a time.
    #[serde(default)]
    pub select_multiple: bool,
}

impl ChartConfig {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_select_multiple(mut self, select_multiple: bool) -> Self {
        self.select_multiple = select_multiple;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.layout.validate()?;
        self.x_axis.validate("x axis")?;
        self.y_axis.validate("y axis")?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Wraps the config in the versioned JSON envelope.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned envelope, then validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartConfigJsonContractV1>(input) {
            if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return payload.config.validate();
        }
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

fn default_width() -> f64 {
    300.0
}

fn default_height() -> f64 {
    100.0
}
