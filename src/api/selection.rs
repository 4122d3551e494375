use indexmap::IndexSet;
use tracing::trace;

use super::GraphicId;

/// Selected graphics, in selection order.
///
/// In single mode selecting replaces whatever was selected before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    multiple: bool,
    selected: IndexSet<GraphicId>,
}

impl SelectionState {
    #[must_use]
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            selected: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Switching to single mode keeps only the most recent selection.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        if !multiple && self.selected.len() > 1 {
            let last = self.selected.pop();
            self.selected.clear();
            self.selected.extend(last);
        }
    }

    /// Returns `false` when `id` was already selected.
    pub fn select(&mut self, id: GraphicId) -> bool {
        if self.selected.contains(&id) {
            return false;
        }
        if !self.multiple {
            self.selected.clear();
        }
        self.selected.insert(id);
        trace!(%id, multiple = self.multiple, "graphic selected");
        true
    }

    /// Returns `false` when `id` was not selected.
    pub fn deselect(&mut self, id: GraphicId) -> bool {
        let removed = self.selected.shift_remove(&id);
        if removed {
            trace!(%id, "graphic deselected");
        }
        removed
    }

    #[must_use]
    pub fn is_selected(&self, id: GraphicId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = GraphicId> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_replaces_selection() {
        let mut selection = SelectionState::new(false);
        assert!(selection.select(GraphicId(1)));
        assert!(selection.select(GraphicId(2)));
        assert!(!selection.is_selected(GraphicId(1)));
        assert_eq!(selection.selected().collect::<Vec<_>>(), vec![GraphicId(2)]);
    }

    #[test]
    fn select_and_deselect_are_idempotent() {
        let mut selection = SelectionState::new(true);
        assert!(selection.select(GraphicId(1)));
        assert!(!selection.select(GraphicId(1)));
        assert!(selection.deselect(GraphicId(1)));
        assert!(!selection.deselect(GraphicId(1)));
    }
}
