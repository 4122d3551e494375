use tracing::trace;

use crate::core::Coordinate;
use crate::interaction::HoverPoint;

use super::{Axis, Chart, DomainView, GraphicGeometry, GraphicId};

impl<T: 'static> Chart<T> {
    /// Visible x domain that rendered series are windowed against.
    pub fn x_domain_view(&mut self) -> DomainView {
        let (graphics, state, x_ordinal) = self.axis_parts(Axis::X);
        if x_ordinal {
            return DomainView::ordinal();
        }
        let (min, max) = state.continuous_domain(graphics, x_ordinal);
        DomainView::continuous(min, max)
    }

    /// Part of a graphic's sorted series needed to draw the current x domain.
    pub fn rendered_series(&mut self, id: GraphicId) -> Option<&[Coordinate]> {
        let view = self.x_domain_view();
        let graphic = self.graphics.get_mut(&id)?;
        Some(graphic.rendered_series(view))
    }

    /// Rendered point of `id` closest to `query`.
    ///
    /// `query` is an x domain value, or a range fraction on ordinal axes.
    pub fn nearest(&mut self, id: GraphicId, query: f64) -> Option<&Coordinate> {
        let view = self.x_domain_view();
        self.graphics.get_mut(&id)?.nearest(view, query)
    }

    /// Rendered point of `id` closest to the x pixel `pixel`.
    pub fn nearest_to_pixel(&mut self, id: GraphicId, pixel: f64) -> Option<&Coordinate> {
        let view = self.x_domain_view();
        let x_scale = self.scale(Axis::X).clone();
        self.graphics
            .get_mut(&id)?
            .nearest_to_pixel(view, &x_scale, pixel)
    }

    pub fn first_visible(&mut self, id: GraphicId) -> Option<&Coordinate> {
        let view = self.x_domain_view();
        self.graphics.get_mut(&id)?.first_visible(view)
    }

    pub fn last_visible(&mut self, id: GraphicId) -> Option<&Coordinate> {
        let view = self.x_domain_view();
        self.graphics.get_mut(&id)?.last_visible(view)
    }

    /// Pixel geometry of one graphic under the current scales.
    pub fn geometry(&mut self, id: GraphicId) -> Option<GraphicGeometry> {
        if !self.graphics.contains_key(&id) {
            return None;
        }
        let view = self.x_domain_view();
        let x_scale = self.scale(Axis::X).clone();
        let y_scale = self.scale(Axis::Y).clone();
        let graphic = self.graphics.get_mut(&id)?;
        Some(graphic.project(view, &x_scale, &y_scale))
    }

    /// Records the pointer position in plot-content pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.hover.on_pointer_move(x, y);
        trace!(x, y, "pointer move");
    }

    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
        trace!("pointer leave");
    }

    /// Domain values under the pointer.
    pub fn hover(&mut self) -> HoverPoint {
        let Some((pixel_x, pixel_y)) = self.hover.pointer() else {
            return HoverPoint::default();
        };
        HoverPoint {
            x: self.invert(Axis::X, pixel_x),
            y: self.invert(Axis::Y, pixel_y),
        }
    }

    pub fn hover_x(&mut self) -> Option<f64> {
        self.hover().x
    }

    pub fn hover_y(&mut self) -> Option<f64> {
        self.hover().y
    }

    /// Selects a registered graphic. Returns `false` if nothing changed.
    pub fn select_graphic(&mut self, id: GraphicId) -> bool {
        self.graphics.contains_key(&id) && self.selection.select(id)
    }

    pub fn deselect_graphic(&mut self, id: GraphicId) -> bool {
        self.selection.deselect(id)
    }

    #[must_use]
    pub fn is_selected(&self, id: GraphicId) -> bool {
        self.selection.is_selected(id)
    }

    #[must_use]
    pub fn selected_graphics(&self) -> Vec<GraphicId> {
        self.selection.selected().collect()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        trace!("clear selection");
    }

    fn invert(&mut self, axis: Axis, pixel: f64) -> Option<f64> {
        self.scale(axis).invert(pixel).filter(|value| !value.is_nan())
    }
}
