use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{
    Accessor, AreaGeometry, BarRect, Coordinate, Memo, Revision, Scale, SortedSeries, Tracked,
    Vertex, first_visible, last_visible, nearest, project_area_geometry, project_bars,
    project_vertices, range_fraction, window_bounds,
};

pub const DEFAULT_X_PATH: &str = "x";
pub const DEFAULT_Y_PATH: &str = "y";
pub const DEFAULT_BAR_WIDTH_PX: f64 = 8.0;

/// Handle of a graphic registered on a chart. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphicId(pub(crate) u64);

impl GraphicId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graphic#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicKind {
    Line,
    Area,
    Bar,
}

/// Visible x domain a rendered series is cut against.
///
/// `min`/`max` are ignored for ordinal axes, which render every point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainView {
    pub min: f64,
    pub max: f64,
    pub ordinal: bool,
}

impl DomainView {
    #[must_use]
    pub fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ordinal: false,
        }
    }

    #[must_use]
    pub fn ordinal() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            ordinal: true,
        }
    }

    fn key(self) -> (OrderedFloat<f64>, OrderedFloat<f64>, bool) {
        (OrderedFloat(self.min), OrderedFloat(self.max), self.ordinal)
    }
}

type SortedKey = (Revision, Revision, Revision, bool);
type RenderedKey = (u64, (OrderedFloat<f64>, OrderedFloat<f64>, bool));

/// Raw data and accessors of one graphic, with the series derived from them.
///
/// The sorted series is keyed by the three input revisions and the ordinal
/// flag; the rendered window by the sorted generation and the domain view.
pub struct SeriesSource<T> {
    data: Tracked<Arc<[T]>>,
    x_accessor: Tracked<Accessor<T>>,
    y_accessor: Tracked<Accessor<T>>,
    sorted: Memo<SortedKey, SortedSeries<T>>,
    rendered: Memo<RenderedKey, Range<usize>>,
}

impl<T> fmt::Debug for SeriesSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesSource")
            .field("len", &self.data.get().len())
            .field("x_accessor", self.x_accessor.get())
            .field("y_accessor", self.y_accessor.get())
            .field("sorted_generation", &self.sorted.generation())
            .finish_non_exhaustive()
    }
}

impl<T> SeriesSource<T> {
    #[must_use]
    pub fn new(data: impl Into<Arc<[T]>>, x_accessor: Accessor<T>, y_accessor: Accessor<T>) -> Self {
        Self {
            data: Tracked::new(data.into()),
            x_accessor: Tracked::new(x_accessor),
            y_accessor: Tracked::new(y_accessor),
            sorted: Memo::new("sorted_series"),
            rendered: Memo::new("rendered_series"),
        }
    }

    #[must_use]
    pub fn data(&self) -> &Arc<[T]> {
        self.data.get()
    }

    #[must_use]
    pub fn x_accessor(&self) -> &Accessor<T> {
        self.x_accessor.get()
    }

    #[must_use]
    pub fn y_accessor(&self) -> &Accessor<T> {
        self.y_accessor.get()
    }

    /// Replaces the raw data. The input is shared, never mutated.
    pub fn set_data(&mut self, data: impl Into<Arc<[T]>>) {
        self.data.set(data.into());
        debug!(len = self.data.get().len(), "set series data");
    }

    pub fn set_x_accessor(&mut self, accessor: Accessor<T>) {
        debug!(path = accessor.source_path(), "set x accessor");
        self.x_accessor.set(accessor);
    }

    pub fn set_y_accessor(&mut self, accessor: Accessor<T>) {
        debug!(path = accessor.source_path(), "set y accessor");
        self.y_accessor.set(accessor);
    }

    /// Brings the sorted series up to date with the inputs.
    ///
    /// Returns `true` when it had to be rebuilt.
    pub fn refresh_sorted(&mut self, is_ordinal: bool) -> bool {
        let key = self.sorted_key(is_ordinal);
        let (data, x_accessor, y_accessor) = (&self.data, &self.x_accessor, &self.y_accessor);
        self.sorted.refresh(key, || {
            SortedSeries::new(
                Arc::clone(data.get()),
                x_accessor.get(),
                y_accessor.get(),
                is_ordinal,
            )
        })
    }

    pub fn sorted(&mut self, is_ordinal: bool) -> &SortedSeries<T> {
        let key = self.sorted_key(is_ordinal);
        let (data, x_accessor, y_accessor) = (&self.data, &self.x_accessor, &self.y_accessor);
        self.sorted.get_or_compute(key, || {
            SortedSeries::new(
                Arc::clone(data.get()),
                x_accessor.get(),
                y_accessor.get(),
                is_ordinal,
            )
        })
    }

    /// Sorted series as of the last refresh, without refreshing.
    #[must_use]
    pub fn sorted_peek(&self) -> Option<&SortedSeries<T>> {
        self.sorted.peek()
    }

    /// Brings the rendered window up to date for `view`.
    pub fn refresh_rendered(&mut self, view: DomainView) -> bool {
        self.refresh_sorted(view.ordinal);
        let Some(series) = self.sorted.peek() else {
            return false;
        };
        let key = (self.sorted.generation(), view.key());
        self.rendered.refresh(key, || {
            window_bounds(series.coordinates(), view.min, view.max, view.ordinal)
        })
    }

    pub fn rendered(&mut self, view: DomainView) -> &[Coordinate] {
        self.refresh_rendered(view);
        self.rendered_peek()
    }

    /// Rendered window as of the last refresh, without refreshing.
    #[must_use]
    pub fn rendered_peek(&self) -> &[Coordinate] {
        match (self.sorted.peek(), self.rendered.peek()) {
            (Some(series), Some(bounds)) => series
                .coordinates()
                .get(bounds.clone())
                .unwrap_or_default(),
            _ => &[],
        }
    }

    /// Recompute counters of the sorted and rendered cells.
    #[must_use]
    pub fn generations(&self) -> (u64, u64) {
        (self.sorted.generation(), self.rendered.generation())
    }

    fn sorted_key(&self, is_ordinal: bool) -> SortedKey {
        (
            self.data.revision(),
            self.x_accessor.revision(),
            self.y_accessor.revision(),
            is_ordinal,
        )
    }
}

impl SeriesSource<Value> {
    /// JSON source reading `x` and `y` through the default dotted paths.
    #[must_use]
    pub fn from_json(data: impl Into<Arc<[Value]>>) -> Self {
        Self::new(
            data,
            Accessor::from_path(DEFAULT_X_PATH),
            Accessor::from_path(DEFAULT_Y_PATH),
        )
    }

    /// An empty path resolves every item to `Undefined`.
    pub fn set_x_path(&mut self, path: &str) {
        self.set_x_accessor(Accessor::from_path(path));
    }

    pub fn set_y_path(&mut self, path: &str) {
        self.set_y_accessor(Accessor::from_path(path));
    }
}

/// Pixel geometry of one graphic for the current scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphicGeometry {
    Line(Vec<Vertex>),
    Area(AreaGeometry),
    Bar(Vec<BarRect>),
}

/// A chart graphic that draws one data series.
///
/// Implementors supply their [`SeriesSource`] and the projection of a rendered
/// window into pixels; sorting, windowing and hover lookup come for free.
pub trait DataGraphic<T> {
    fn kind(&self) -> GraphicKind;

    fn source(&self) -> &SeriesSource<T>;

    fn source_mut(&mut self) -> &mut SeriesSource<T>;

    fn geometry(&self, rendered: &[Coordinate], x_scale: &Scale, y_scale: &Scale)
    -> GraphicGeometry;

    fn sorted_series(&mut self, is_ordinal: bool) -> &SortedSeries<T> {
        self.source_mut().sorted(is_ordinal)
    }

    fn rendered_series<'a>(&'a mut self, view: DomainView) -> &'a [Coordinate]
    where
        T: 'a,
    {
        self.source_mut().rendered(view)
    }

    /// Closest rendered point to `query`.
    ///
    /// `query` is an x domain value, or a range fraction for ordinal views.
    fn nearest<'a>(&'a mut self, view: DomainView, query: f64) -> Option<&'a Coordinate>
    where
        T: 'a,
    {
        nearest(self.rendered_series(view), query, view.ordinal)
    }

    fn nearest_to_pixel<'a>(
        &'a mut self,
        view: DomainView,
        x_scale: &Scale,
        pixel: f64,
    ) -> Option<&'a Coordinate>
    where
        T: 'a,
    {
        let query = if view.ordinal {
            range_fraction(pixel, x_scale.range())?
        } else {
            x_scale.invert(pixel)?
        };
        self.nearest(view, query)
    }

    fn first_visible<'a>(&'a mut self, view: DomainView) -> Option<&'a Coordinate>
    where
        T: 'a,
    {
        first_visible(self.rendered_series(view), view.min)
    }

    fn last_visible<'a>(&'a mut self, view: DomainView) -> Option<&'a Coordinate>
    where
        T: 'a,
    {
        last_visible(self.rendered_series(view), view.max)
    }

    fn project(&mut self, view: DomainView, x_scale: &Scale, y_scale: &Scale) -> GraphicGeometry {
        self.source_mut().refresh_rendered(view);
        self.geometry(self.source().rendered_peek(), x_scale, y_scale)
    }
}

#[derive(Debug)]
pub struct LineGraphic<T> {
    source: SeriesSource<T>,
}

impl<T> LineGraphic<T> {
    #[must_use]
    pub fn new(source: SeriesSource<T>) -> Self {
        Self { source }
    }
}

impl<T> DataGraphic<T> for LineGraphic<T> {
    fn kind(&self) -> GraphicKind {
        GraphicKind::Line
    }

    fn source(&self) -> &SeriesSource<T> {
        &self.source
    }

    fn source_mut(&mut self) -> &mut SeriesSource<T> {
        &mut self.source
    }

    fn geometry(
        &self,
        rendered: &[Coordinate],
        x_scale: &Scale,
        y_scale: &Scale,
    ) -> GraphicGeometry {
        GraphicGeometry::Line(project_vertices(rendered, x_scale, y_scale))
    }
}

#[derive(Debug)]
pub struct AreaGraphic<T> {
    source: SeriesSource<T>,
}

impl<T> AreaGraphic<T> {
    #[must_use]
    pub fn new(source: SeriesSource<T>) -> Self {
        Self { source }
    }
}

impl<T> DataGraphic<T> for AreaGraphic<T> {
    fn kind(&self) -> GraphicKind {
        GraphicKind::Area
    }

    fn source(&self) -> &SeriesSource<T> {
        &self.source
    }

    fn source_mut(&mut self) -> &mut SeriesSource<T> {
        &mut self.source
    }

    fn geometry(
        &self,
        rendered: &[Coordinate],
        x_scale: &Scale,
        y_scale: &Scale,
    ) -> GraphicGeometry {
        GraphicGeometry::Area(project_area_geometry(rendered, x_scale, y_scale))
    }
}

#[derive(Debug)]
pub struct BarGraphic<T> {
    source: SeriesSource<T>,
    continuous_width_px: f64,
}

impl<T> BarGraphic<T> {
    #[must_use]
    pub fn new(source: SeriesSource<T>) -> Self {
        Self {
            source,
            continuous_width_px: DEFAULT_BAR_WIDTH_PX,
        }
    }

    /// Bar width used when the x axis is not ordinal.
    #[must_use]
    pub fn with_continuous_width(mut self, width_px: f64) -> Self {
        self.continuous_width_px = width_px;
        self
    }

    #[must_use]
    pub fn continuous_width_px(&self) -> f64 {
        self.continuous_width_px
    }
}

impl<T> DataGraphic<T> for BarGraphic<T> {
    fn kind(&self) -> GraphicKind {
        GraphicKind::Bar
    }

    fn source(&self) -> &SeriesSource<T> {
        &self.source
    }

    fn source_mut(&mut self) -> &mut SeriesSource<T> {
        &mut self.source
    }

    fn geometry(
        &self,
        rendered: &[Coordinate],
        x_scale: &Scale,
        y_scale: &Scale,
    ) -> GraphicGeometry {
        GraphicGeometry::Bar(project_bars(
            rendered,
            x_scale,
            y_scale,
            self.continuous_width_px,
        ))
    }
}
