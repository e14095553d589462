use favprimes::mvi::Reducer;
use favprimes::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesViewState};
use std::collections::BTreeSet;

fn at(selected: usize) -> FavoritesViewState {
    FavoritesViewState {
        selected,
        ..FavoritesViewState::default()
    }
}

#[test]
fn test_move_down_wraps() {
    let state = FavoritesReducer::reduce(at(1), FavoritesIntent::MoveDown { len: 3 });
    assert_eq!(state.selected, 2);
    let state = FavoritesReducer::reduce(state, FavoritesIntent::MoveDown { len: 3 });
    assert_eq!(state.selected, 0);
}

#[test]
fn test_move_up_wraps() {
    let state = FavoritesReducer::reduce(at(0), FavoritesIntent::MoveUp { len: 3 });
    assert_eq!(state.selected, 2);
    let state = FavoritesReducer::reduce(state, FavoritesIntent::MoveUp { len: 3 });
    assert_eq!(state.selected, 1);
}

#[test]
fn test_moves_on_empty_list_are_noops() {
    let state = FavoritesReducer::reduce(at(0), FavoritesIntent::MoveUp { len: 0 });
    let state = FavoritesReducer::reduce(state, FavoritesIntent::MoveDown { len: 0 });
    assert_eq!(state, FavoritesViewState::default());
}

#[test]
fn test_toggle_mark() {
    let state = FavoritesReducer::reduce(at(1), FavoritesIntent::ToggleMark { len: 3 });
    assert!(state.is_marked(1));
    let state = FavoritesReducer::reduce(state, FavoritesIntent::ToggleMark { len: 3 });
    assert!(!state.is_marked(1));
}

#[test]
fn test_toggle_mark_out_of_range_ignored() {
    let state = FavoritesReducer::reduce(at(4), FavoritesIntent::ToggleMark { len: 2 });
    assert!(state.marked.is_empty());
}

#[test]
fn test_removal_positions_prefer_marks() {
    let mut state = at(0);
    state.marked = BTreeSet::from([1, 3, 9]);
    assert_eq!(state.removal_positions(4), BTreeSet::from([1, 3]));
}

#[test]
fn test_removal_positions_fall_back_to_cursor() {
    assert_eq!(at(2).removal_positions(3), BTreeSet::from([2]));
    assert!(at(0).removal_positions(0).is_empty());
}

#[test]
fn test_list_changed_clamps_and_clears_marks() {
    let mut state = at(3);
    state.marked = BTreeSet::from([0, 3]);
    let state = FavoritesReducer::reduce(state, FavoritesIntent::ListChanged { len: 2 });
    assert_eq!(state.selected, 1);
    assert!(state.marked.is_empty());

    let state = FavoritesReducer::reduce(state, FavoritesIntent::ListChanged { len: 0 });
    assert_eq!(state.selected, 0);
}

#[test]
fn test_leave_resets() {
    let mut state = at(2);
    state.marked.insert(2);
    let state = FavoritesReducer::reduce(state, FavoritesIntent::Leave);
    assert_eq!(state, FavoritesViewState::default());
}
