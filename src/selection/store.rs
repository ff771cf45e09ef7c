use crate::model::ItemId;
use crate::selection::Selection;

/// Selection history. The last snapshot is the current selection and the
/// first one is always the empty initial selection.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    history: Vec<Selection>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            history: vec![Selection::new()],
        }
    }

    pub fn current(&self) -> &Selection {
        // history is never empty: undo stops at the initial snapshot
        &self.history[self.history.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.current().contains(id)
    }

    /// Pushes a snapshot with `id` flipped and returns whether `id` is now selected.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let next = self.current().toggled(id);
        let selected = next.contains(id);
        self.history.push(next);
        selected
    }

    /// Reverts to the previous snapshot. Returns `false` at the initial snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.history.pop();
        true
    }
}
