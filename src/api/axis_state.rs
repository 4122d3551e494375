use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::extent::{categories, extent};
use crate::core::{
    AxisEdge, AxisRange, Datum, Extent, Memo, RangeContext, RangeMode, Scale, ScaleDomain,
    ScaleKind, ScaleParams, build_scale, floor_log_domain,
};

use super::{Axis, AxisConfig, DataGraphic, GraphicId};

pub(super) type GraphicRegistry<T> = IndexMap<GraphicId, Box<dyn DataGraphic<T>>>;

/// Registered graphics with the generation of their sorted series.
type SeriesKey = SmallVec<[(GraphicId, u64); 4]>;
type EdgeKey = (Option<OrderedFloat<f64>>, Option<OrderedFloat<f64>>);

#[derive(Debug, Clone, Copy, PartialEq)]
struct SettleKey {
    extent: EdgeKey,
    mode: RangeMode,
    context: RangeContext,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DomainKey {
    Continuous(OrderedFloat<f64>, OrderedFloat<f64>),
    Ordinal(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScaleKey {
    kind: ScaleKind,
    domain: DomainKey,
    range: (OrderedFloat<f64>, OrderedFloat<f64>),
    params: ScaleParams,
}

/// Configuration, range ends and derived cells of one axis.
///
/// Range ends settle only when their extent, mode or context changed, so a
/// value written through [`AxisRange::assign`] survives reads until then.
#[derive(Debug)]
pub(super) struct AxisState {
    axis: Axis,
    config: AxisConfig,
    min: AxisRange,
    max: AxisRange,
    extent: Memo<SeriesKey, Extent>,
    categories: Memo<SeriesKey, Vec<String>>,
    min_settle: Memo<SettleKey, f64>,
    max_settle: Memo<SettleKey, f64>,
    scale: Memo<ScaleKey, Scale>,
}

impl AxisState {
    pub(super) fn new(axis: Axis, config: AxisConfig) -> Self {
        Self {
            axis,
            config,
            min: AxisRange::new(AxisEdge::Min, config.min_mode),
            max: AxisRange::new(AxisEdge::Max, config.max_mode),
            extent: Memo::new("axis_extent"),
            categories: Memo::new("axis_categories"),
            min_settle: Memo::new("axis_min"),
            max_settle: Memo::new("axis_max"),
            scale: Memo::new("axis_scale"),
        }
    }

    pub(super) fn config(&self) -> AxisConfig {
        self.config
    }

    pub(super) fn set_config(&mut self, config: AxisConfig) {
        self.config = config;
        self.min.set_mode(config.min_mode);
        self.max.set_mode(config.max_mode);
    }

    pub(super) fn set_mode(&mut self, edge: AxisEdge, mode: RangeMode) {
        match edge {
            AxisEdge::Min => self.config.min_mode = mode,
            AxisEdge::Max => self.config.max_mode = mode,
        }
        self.range_mut(edge).set_mode(mode);
    }

    pub(super) fn range_mut(&mut self, edge: AxisEdge) -> &mut AxisRange {
        match edge {
            AxisEdge::Min => &mut self.min,
            AxisEdge::Max => &mut self.max,
        }
    }

    pub(super) fn is_ordinal(&self) -> bool {
        self.config.scale_kind.is_ordinal()
    }

    pub(super) fn context(&self) -> RangeContext {
        RangeContext {
            scale_kind: self.config.scale_kind,
            params: self.config.params,
            tick_count: self
                .config
                .resolved_tick_count(self.axis.default_tick_count()),
        }
    }

    pub(super) fn settled_extent<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
    ) -> Extent {
        let key = series_key(graphics, x_ordinal);
        let axis = self.axis;
        *self
            .extent
            .get_or_compute(key, || extent(axis_values(graphics, axis)))
    }

    pub(super) fn category_list<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
    ) -> &[String] {
        let key = series_key(graphics, x_ordinal);
        let axis = self.axis;
        self.categories
            .get_or_compute(key, || categories(axis_values(graphics, axis)))
    }

    /// Runs both range ends against the current extent; returns `(min, max)`.
    pub(super) fn settle<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
    ) -> (f64, f64) {
        let extent = self.settled_extent(graphics, x_ordinal);
        let context = self.context();
        let edges = (extent.min.map(OrderedFloat), extent.max.map(OrderedFloat));
        let Self {
            min,
            max,
            min_settle,
            max_settle,
            ..
        } = self;

        let min_key = SettleKey {
            extent: edges,
            mode: min.mode(),
            context,
        };
        min_settle.refresh(min_key, || min.recompute(extent, &context));
        let max_key = SettleKey {
            extent: edges,
            mode: max.mode(),
            context,
        };
        max_settle.refresh(max_key, || max.recompute(extent, &context));

        (min.value(), max.value())
    }

    /// Settled `(min, max)`, floored for log scales.
    pub(super) fn continuous_domain<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
    ) -> (f64, f64) {
        let domain = self.settle(graphics, x_ordinal);
        if self.config.scale_kind == ScaleKind::Log {
            floor_log_domain(domain, self.config.params.effective_log_min())
        } else {
            domain
        }
    }

    pub(super) fn domain<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
    ) -> ScaleDomain {
        if self.is_ordinal() {
            ScaleDomain::Ordinal(self.category_list(graphics, x_ordinal).to_vec())
        } else {
            let (low, high) = self.continuous_domain(graphics, x_ordinal);
            ScaleDomain::Continuous(low, high)
        }
    }

    pub(super) fn scale<T>(
        &mut self,
        graphics: &mut GraphicRegistry<T>,
        x_ordinal: bool,
        range: (f64, f64),
    ) -> &Scale {
        let domain = if self.is_ordinal() {
            self.category_list(graphics, x_ordinal);
            DomainKey::Ordinal(self.categories.generation())
        } else {
            let (low, high) = self.continuous_domain(graphics, x_ordinal);
            DomainKey::Continuous(OrderedFloat(low), OrderedFloat(high))
        };
        let config = self.config;
        let key = ScaleKey {
            kind: config.scale_kind,
            domain,
            range: (OrderedFloat(range.0), OrderedFloat(range.1)),
            params: config.params,
        };

        let categories = &self.categories;
        self.scale.get_or_compute(key, || {
            let domain = match domain {
                DomainKey::Ordinal(_) => {
                    ScaleDomain::Ordinal(categories.peek().cloned().unwrap_or_default())
                }
                DomainKey::Continuous(low, high) => {
                    ScaleDomain::Continuous(low.into_inner(), high.into_inner())
                }
            };
            build_scale(config.scale_kind, domain, range, config.params)
        })
    }

    /// Recompute counters: `(extent, categories, range ends, scale)`.
    pub(super) fn generations(&self) -> (u64, u64, u64, u64) {
        (
            self.extent.generation(),
            self.categories.generation(),
            self.min_settle.generation() + self.max_settle.generation(),
            self.scale.generation(),
        )
    }
}

/// Refreshes every sorted series and collects their generations.
fn series_key<T>(graphics: &mut GraphicRegistry<T>, x_ordinal: bool) -> SeriesKey {
    graphics
        .iter_mut()
        .map(|(id, graphic)| {
            let source = graphic.source_mut();
            source.refresh_sorted(x_ordinal);
            (*id, source.generations().0)
        })
        .collect()
}

fn axis_values<T>(graphics: &GraphicRegistry<T>, axis: Axis) -> impl Iterator<Item = &[Datum]> {
    graphics
        .values()
        .filter_map(|graphic| graphic.source().sorted_peek())
        .map(move |series| match axis {
            Axis::X => series.xs(),
            Axis::Y => series.ys(),
        })
}
