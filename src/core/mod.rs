pub mod accessor;
pub mod area_series;
pub mod axis_range;
pub mod bar_series;
pub mod extent;
pub mod line_series;
pub mod memo;
pub mod nearest;
pub mod nice;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod windowing;

pub use accessor::Accessor;
pub use area_series::{AreaGeometry, project_area_geometry};
pub use axis_range::{AxisEdge, AxisRange, RangeContext, RangeMode};
pub use bar_series::{BarRect, project_bars};
pub use extent::{categories, extent};
pub use line_series::{Vertex, project_vertices};
pub use memo::{Memo, Revision, Tracked};
pub use nearest::{nearest, nearest_index, range_fraction};
pub use nice::{DEFAULT_X_TICK_COUNT, DEFAULT_Y_TICK_COUNT, nice_domain, nice_linear, nice_log};
pub use scale::{
    Band, ContinuousScale, OrdinalScale, Scale, ScaleDomain, ScaleKind, ScaleParams, build_scale,
    floor_log_domain,
};
pub use series::{SortedSeries, transform_series};
pub use types::{Coordinate, Datum, Extent};
pub use windowing::{first_visible, last_visible, window, window_bounds, window_linear};
