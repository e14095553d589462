use crate::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesViewState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesViewState;
    type Intent = FavoritesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::MoveUp { len } => {
                if len > 0 {
                    state.selected = if state.selected == 0 {
                        len - 1
                    } else {
                        state.selected.min(len) - 1
                    };
                }
                state
            }
            FavoritesIntent::MoveDown { len } => {
                if len > 0 {
                    state.selected = if state.selected + 1 >= len {
                        0
                    } else {
                        state.selected + 1
                    };
                }
                state
            }
            FavoritesIntent::ToggleMark { len } => {
                if state.selected < len && !state.marked.remove(&state.selected) {
                    state.marked.insert(state.selected);
                }
                state
            }
            FavoritesIntent::ListChanged { len } => FavoritesViewState {
                selected: state.selected.min(len.saturating_sub(1)),
                marked: Default::default(),
            },
            FavoritesIntent::Leave => FavoritesViewState::default(),
        }
    }
}
