mod axis_controller;
mod axis_state;
mod chart;
mod chart_config;
mod data_controller;
mod graphic;
mod interaction_controller;
mod selection;

pub use chart::{Axis, Chart, RecomputeStats};
pub use chart_config::{
    AxisConfig, CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig, ChartConfigJsonContractV1, ChartLayout,
    XAxisOrient, YAxisOrient,
};
pub use graphic::{
    AreaGraphic, BarGraphic, DEFAULT_BAR_WIDTH_PX, DEFAULT_X_PATH, DEFAULT_Y_PATH, DataGraphic,
    DomainView, GraphicGeometry, GraphicId, GraphicKind, LineGraphic, SeriesSource,
};
pub use selection::SelectionState;
