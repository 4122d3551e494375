use serde::{Deserialize, Serialize};

/// Domain values under the pointer, one per axis.
///
/// A side is `None` when the pointer is outside the plot, the axis is
/// ordinal, or the inverse mapping produced no number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Pointer position over the plot content, in content-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    pointer: Option<(f64, f64)>,
}

impl HoverState {
    #[must_use]
    pub fn pointer(self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }
}
