use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Scale};

/// Point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Maps coordinates to pixel vertices, dropping the ones either scale cannot map.
///
/// Ordinal x values land on their band centre.
#[must_use]
pub fn project_vertices(coordinates: &[Coordinate], x_scale: &Scale, y_scale: &Scale) -> Vec<Vertex> {
    coordinates
        .iter()
        .filter_map(|coordinate| {
            Some(Vertex {
                x: x_scale.position(&coordinate.x)?,
                y: y_scale.position(&coordinate.y)?,
            })
        })
        .collect()
}
