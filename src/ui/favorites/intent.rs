use crate::mvi::Intent;

/// `len` is the current number of favorites; the view state does not own
/// the list.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesIntent {
    MoveUp { len: usize },
    MoveDown { len: usize },
    ToggleMark { len: usize },
    /// The list changed underneath; clear marks and keep the cursor in range.
    ListChanged { len: usize },
    Leave,
}

impl Intent for FavoritesIntent {}
