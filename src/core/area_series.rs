use serde::{Deserialize, Serialize};

use crate::core::line_series::{Vertex, project_vertices};
use crate::core::{Coordinate, Scale};

/// Deterministic geometry for an area graphic.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<Vertex>,
    pub fill_polygon: Vec<Vertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Projects a rendered series into area geometry.
///
/// The baseline is the start of the y range, which is the plot bottom for
/// the usual `[height, 0]` y range.
#[must_use]
pub fn project_area_geometry(
    coordinates: &[Coordinate],
    x_scale: &Scale,
    y_scale: &Scale,
) -> AreaGeometry {
    let line_points = project_vertices(coordinates, x_scale, y_scale);
    let (Some(first), Some(last)) = (line_points.first(), line_points.last()) else {
        return AreaGeometry::empty();
    };

    let baseline_y = y_scale.range().0;
    let first_base = Vertex {
        x: first.x,
        y: baseline_y,
    };
    let last_base = Vertex {
        x: last.x,
        y: baseline_y,
    };

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(first_base);
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(last_base);
    // Repeat the first vertex so consumers need no implicit closure rule.
    fill_polygon.push(first_base);

    AreaGeometry {
        line_points,
        fill_polygon,
    }
}
