use crate::mvi::UiState;
use std::collections::BTreeSet;

/// Cursor and multi-selection on the favorites list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesViewState {
    pub selected: usize,
    /// Positions marked for removal.
    pub marked: BTreeSet<usize>,
}

impl UiState for FavoritesViewState {}

impl FavoritesViewState {
    /// Positions a delete should remove: the marked ones, or the cursor row
    /// when nothing is marked.
    pub fn removal_positions(&self, len: usize) -> BTreeSet<usize> {
        if !self.marked.is_empty() {
            return self.marked.iter().copied().filter(|&i| i < len).collect();
        }
        if self.selected < len {
            BTreeSet::from([self.selected])
        } else {
            BTreeSet::new()
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }
}
