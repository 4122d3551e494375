use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{DEFAULT_X_TICK_COUNT, DEFAULT_Y_TICK_COUNT};
use crate::error::ChartResult;
use crate::interaction::HoverState;

use super::axis_state::{AxisState, GraphicRegistry};
use super::{AxisConfig, ChartConfig, ChartLayout, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Tick count used for nice rounding when the axis sets none.
    #[must_use]
    pub fn default_tick_count(self) -> usize {
        match self {
            Self::X => DEFAULT_X_TICK_COUNT,
            Self::Y => DEFAULT_Y_TICK_COUNT,
        }
    }
}

/// How often each kind of derived value has been recomputed.
///
/// Series counters sum over the graphics registered right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecomputeStats {
    pub sorted_series: u64,
    pub rendered_windows: u64,
    pub extents: u64,
    pub categories: u64,
    pub ranges: u64,
    pub scales: u64,
}

/// Cartesian chart over data objects of type `T`.
///
/// `Chart` owns the registered graphics, both axes and the hover/selection
/// state. Every derived value (sorted series, extents, range ends, scales,
/// rendered windows) is computed lazily on read, which is why readers take
/// `&mut self`.
pub struct Chart<T = Value> {
    pub(super) layout: ChartLayout,
    pub(super) graphics: GraphicRegistry<T>,
    pub(super) next_graphic_id: u64,
    pub(super) x: AxisState,
    pub(super) y: AxisState,
    pub(super) hover: HoverState,
    pub(super) selection: SelectionState,
}

impl<T> fmt::Debug for Chart<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("layout", &self.layout)
            .field("graphics", &self.graphics.keys().collect::<Vec<_>>())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("hover", &self.hover)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Chart<T> {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            width = config.layout.width,
            height = config.layout.height,
            x_scale = %config.x_axis.scale_kind,
            y_scale = %config.y_axis.scale_kind,
            "create chart"
        );
        Ok(Self {
            layout: config.layout,
            graphics: IndexMap::new(),
            next_graphic_id: 0,
            x: AxisState::new(Axis::X, config.x_axis),
            y: AxisState::new(Axis::Y, config.y_axis),
            hover: HoverState::default(),
            selection: SelectionState::new(config.select_multiple),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        ChartConfig {
            layout: self.layout,
            x_axis: self.x.config(),
            y_axis: self.y.config(),
            select_multiple: self.selection.is_multiple(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ChartLayout) -> ChartResult<()> {
        let config = ChartConfig {
            layout,
            ..self.config()
        }
        .validate()?;
        debug!(
            width = config.layout.width,
            height = config.layout.height,
            "set layout"
        );
        self.layout = config.layout;
        Ok(())
    }

    pub fn set_select_multiple(&mut self, multiple: bool) {
        self.selection.set_multiple(multiple);
    }

    /// True once at least one graphic is registered.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.graphics.is_empty()
    }

    #[must_use]
    pub fn has_x_axis(&self) -> bool {
        self.layout.has_x_axis()
    }

    #[must_use]
    pub fn has_y_axis(&self) -> bool {
        self.layout.has_y_axis()
    }

    #[must_use]
    pub fn graph_origin(&self) -> (f64, f64) {
        self.layout.graph_origin()
    }

    /// Pixel range of `axis`: the configured override or the layout-derived one.
    #[must_use]
    pub fn pixel_range(&self, axis: Axis) -> (f64, f64) {
        let config = self.axis_config(axis);
        config.range.unwrap_or_else(|| match axis {
            Axis::X => self.layout.x_range(),
            Axis::Y => self.layout.y_range(),
        })
    }

    #[must_use]
    pub fn axis_config(&self, axis: Axis) -> AxisConfig {
        self.axis_state(axis).config()
    }

    #[must_use]
    pub fn recompute_stats(&self) -> RecomputeStats {
        let (sorted_series, rendered_windows) = self
            .graphics
            .values()
            .map(|graphic| graphic.source().generations())
            .fold((0, 0), |(sorted, rendered), (s, r)| (sorted + s, rendered + r));
        let (x_extent, x_categories, x_ranges, x_scales) = self.x.generations();
        let (y_extent, y_categories, y_ranges, y_scales) = self.y.generations();

        RecomputeStats {
            sorted_series,
            rendered_windows,
            extents: x_extent + y_extent,
            categories: x_categories + y_categories,
            ranges: x_ranges + y_ranges,
            scales: x_scales + y_scales,
        }
    }

    pub(super) fn axis_state(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Registry and one axis borrowed apart, plus the x ordinal flag that
    /// decides how every series is sorted.
    pub(super) fn axis_parts(
        &mut self,
        axis: Axis,
    ) -> (&mut GraphicRegistry<T>, &mut AxisState, bool) {
        let x_ordinal = self.x.is_ordinal();
        let state = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        (&mut self.graphics, state, x_ordinal)
    }
}
