//! xygraph-rs: lazily recomputed Cartesian chart pipeline.
//!
//! Data objects are mapped through x/y accessors into sorted series, merged
//! into per-axis extents, settled into axis ranges under one of four
//! autoranging modes, and projected to pixels through linear, log, power or
//! ordinal scales. Rendering and event wiring stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{Axis, Chart, ChartConfig, ChartLayout};
pub use error::{ChartError, ChartResult};
