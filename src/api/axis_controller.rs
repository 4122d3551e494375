use tracing::debug;

use crate::core::{AxisEdge, Extent, RangeMode, Scale, ScaleDomain, ScaleKind};
use crate::error::ChartResult;

use super::{Axis, AxisConfig, Chart, ChartConfig};

impl<T: 'static> Chart<T> {
    /// Finite `(min, max)` over every registered series on `axis`.
    pub fn extent(&mut self, axis: Axis) -> Extent {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.settled_extent(graphics, x_ordinal)
    }

    /// Distinct category keys on `axis`, in first-seen order.
    pub fn categories(&mut self, axis: Axis) -> Vec<String> {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.category_list(graphics, x_ordinal).to_vec()
    }

    pub fn axis_min(&mut self, axis: Axis) -> f64 {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.settle(graphics, x_ordinal).0
    }

    pub fn axis_max(&mut self, axis: Axis) -> f64 {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.settle(graphics, x_ordinal).1
    }

    pub fn x_min(&mut self) -> f64 {
        self.axis_min(Axis::X)
    }

    pub fn x_max(&mut self) -> f64 {
        self.axis_max(Axis::X)
    }

    pub fn y_min(&mut self) -> f64 {
        self.axis_min(Axis::Y)
    }

    pub fn y_max(&mut self) -> f64 {
        self.axis_max(Axis::Y)
    }

    /// Writes one axis end directly, whatever its mode.
    ///
    /// The value holds until the extent, mode or scale settings change, and
    /// is the baseline `Push` and `PushTick` grow from.
    pub fn assign_axis_range(&mut self, axis: Axis, edge: AxisEdge, value: f64) {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        // Settle first so a pending recompute cannot overwrite the write.
        state.settle(graphics, x_ordinal);
        state.range_mut(edge).assign(value);
        debug!(?axis, ?edge, value, "assign axis range");
    }

    pub fn set_x_min(&mut self, value: f64) {
        self.assign_axis_range(Axis::X, AxisEdge::Min, value);
    }

    pub fn set_x_max(&mut self, value: f64) {
        self.assign_axis_range(Axis::X, AxisEdge::Max, value);
    }

    pub fn set_y_min(&mut self, value: f64) {
        self.assign_axis_range(Axis::Y, AxisEdge::Min, value);
    }

    pub fn set_y_max(&mut self, value: f64) {
        self.assign_axis_range(Axis::Y, AxisEdge::Max, value);
    }

    pub fn set_axis_mode(&mut self, axis: Axis, edge: AxisEdge, mode: RangeMode) {
        let (_, state, _) = self.axis_parts(axis);
        state.set_mode(edge, mode);
        debug!(?axis, ?edge, %mode, "set axis range mode");
    }

    /// Replaces the configuration of one axis, keeping the current range values.
    pub fn set_axis_config(&mut self, axis: Axis, config: AxisConfig) -> ChartResult<()> {
        let mut chart_config = self.config();
        match axis {
            Axis::X => chart_config.x_axis = config,
            Axis::Y => chart_config.y_axis = config,
        }
        let ChartConfig { x_axis, y_axis, .. } = chart_config.validate()?;
        let config = match axis {
            Axis::X => x_axis,
            Axis::Y => y_axis,
        };
        let (_, state, _) = self.axis_parts(axis);
        state.set_config(config);
        debug!(
            ?axis,
            scale = %config.scale_kind,
            min_mode = %config.min_mode,
            max_mode = %config.max_mode,
            "set axis config"
        );
        Ok(())
    }

    pub fn set_scale_kind(&mut self, axis: Axis, kind: ScaleKind) -> ChartResult<()> {
        let config = AxisConfig {
            scale_kind: kind,
            ..self.axis_config(axis)
        };
        self.set_axis_config(axis, config)
    }

    /// Scale domain of `axis`.
    ///
    /// Continuous axes report the settled `(min, max)`, floored for log
    /// scales; ordinal axes report their category list.
    pub fn domain(&mut self, axis: Axis) -> ScaleDomain {
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.domain(graphics, x_ordinal)
    }

    pub fn scale(&mut self, axis: Axis) -> &Scale {
        let range = self.pixel_range(axis);
        let (graphics, state, x_ordinal) = self.axis_parts(axis);
        state.scale(graphics, x_ordinal, range)
    }
}
