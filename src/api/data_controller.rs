use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::core::{Accessor, SortedSeries};
use crate::error::{ChartError, ChartResult};

use super::{AreaGraphic, BarGraphic, Chart, DataGraphic, GraphicId, LineGraphic, SeriesSource};

impl<T: 'static> Chart<T> {
    /// Adds a graphic; its series joins the axis extents on the next read.
    pub fn register_graphic<G>(&mut self, graphic: G) -> GraphicId
    where
        G: DataGraphic<T> + 'static,
    {
        let id = GraphicId(self.next_graphic_id);
        self.next_graphic_id += 1;
        debug!(
            %id,
            kind = ?graphic.kind(),
            len = graphic.source().data().len(),
            "register graphic"
        );
        self.graphics.insert(id, Box::new(graphic));
        id
    }

    pub fn add_line(&mut self, source: SeriesSource<T>) -> GraphicId {
        self.register_graphic(LineGraphic::new(source))
    }

    pub fn add_area(&mut self, source: SeriesSource<T>) -> GraphicId {
        self.register_graphic(AreaGraphic::new(source))
    }

    pub fn add_bar(&mut self, source: SeriesSource<T>) -> GraphicId {
        self.register_graphic(BarGraphic::new(source))
    }

    /// Removes a graphic and drops it from the selection.
    ///
    /// Returns `false` for an unknown id.
    pub fn unregister_graphic(&mut self, id: GraphicId) -> bool {
        if self.graphics.shift_remove(&id).is_none() {
            return false;
        }
        self.selection.deselect(id);
        debug!(%id, remaining = self.graphics.len(), "unregister graphic");
        true
    }

    #[must_use]
    pub fn graphic_ids(&self) -> Vec<GraphicId> {
        self.graphics.keys().copied().collect()
    }

    #[must_use]
    pub fn graphic(&self, id: GraphicId) -> Option<&(dyn DataGraphic<T> + 'static)> {
        self.graphics.get(&id).map(|graphic| &**graphic)
    }

    pub fn graphic_mut(&mut self, id: GraphicId) -> Option<&mut (dyn DataGraphic<T> + 'static)> {
        self.graphics.get_mut(&id).map(|graphic| &mut **graphic)
    }

    pub fn set_graphic_data(&mut self, id: GraphicId, data: impl Into<Arc<[T]>>) -> ChartResult<()> {
        self.source_mut(id)?.set_data(data);
        Ok(())
    }

    pub fn set_graphic_accessors(
        &mut self,
        id: GraphicId,
        x_accessor: Accessor<T>,
        y_accessor: Accessor<T>,
    ) -> ChartResult<()> {
        let source = self.source_mut(id)?;
        source.set_x_accessor(x_accessor);
        source.set_y_accessor(y_accessor);
        Ok(())
    }

    /// Sorted series of one graphic, sorted for the current x axis kind.
    pub fn sorted_series(&mut self, id: GraphicId) -> Option<&SortedSeries<T>> {
        let x_ordinal = self.x.is_ordinal();
        let graphic = self.graphics.get_mut(&id)?;
        Some(graphic.sorted_series(x_ordinal))
    }

    fn source_mut(&mut self, id: GraphicId) -> ChartResult<&mut SeriesSource<T>> {
        self.graphics
            .get_mut(&id)
            .map(|graphic| graphic.source_mut())
            .ok_or_else(|| ChartError::InvalidData(format!("unknown {id}")))
    }
}

impl Chart<Value> {
    /// Points a JSON graphic at new dotted property paths.
    pub fn set_graphic_paths(&mut self, id: GraphicId, x_path: &str, y_path: &str) -> ChartResult<()> {
        self.set_graphic_accessors(id, Accessor::from_path(x_path), Accessor::from_path(y_path))
    }

    /// Registers a line graphic over JSON objects read through `x`/`y`.
    pub fn add_json_line(&mut self, data: Vec<Value>) -> GraphicId {
        self.add_line(SeriesSource::from_json(data))
    }
}
