use std::collections::BTreeSet;
use std::time::{Duration, SystemTime};

use favprimes::mvi::Reducer;
use favprimes::state::{Activity, ActivityKind, AppIntent, AppReducer, AppState};

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

fn with_favorites(count: i64, favorites: &[i64]) -> AppState {
    AppState {
        count,
        favorite_primes: favorites.to_vec(),
        ..AppState::default()
    }
}

fn kinds(state: &AppState) -> Vec<ActivityKind> {
    state.activity_feed.iter().map(|a| a.kind).collect()
}

#[test]
fn increment_and_decrement() {
    let state = AppReducer::reduce(AppState::default(), AppIntent::IncrementCount);
    let state = AppReducer::reduce(state, AppIntent::IncrementCount);
    assert_eq!(state.count, 2);
    let state = AppReducer::reduce(state, AppIntent::DecrementCount);
    let state = AppReducer::reduce(state, AppIntent::DecrementCount);
    let state = AppReducer::reduce(state, AppIntent::DecrementCount);
    assert_eq!(state.count, -1);
}

#[test]
fn add_favorite_records_activity() {
    let state = AppReducer::reduce(
        AppState::with_count(7),
        AppIntent::AddFavoritePrime { at: at(10) },
    );
    assert_eq!(state.favorite_primes, vec![7]);
    assert_eq!(
        state.last_activity(),
        Some(&Activity {
            timestamp: at(10),
            kind: ActivityKind::AddedFavoritePrime(7),
        })
    );
}

#[test]
fn add_favorite_allows_duplicates() {
    let state = AppReducer::reduce(
        AppState::with_count(7),
        AppIntent::AddFavoritePrime { at: at(1) },
    );
    let state = AppReducer::reduce(state, AppIntent::AddFavoritePrime { at: at(2) });
    assert_eq!(state.favorite_primes, vec![7, 7]);
    assert_eq!(state.activity_feed.len(), 2);
}

#[test]
fn remove_value_removes_all_occurrences_logs_once() {
    let state = AppReducer::reduce(
        with_favorites(0, &[3, 7, 7, 11]),
        AppIntent::RemoveFavoritePrime { prime: 7, at: at(1) },
    );
    assert_eq!(state.favorite_primes, vec![3, 11]);
    assert_eq!(kinds(&state), vec![ActivityKind::RemovedFavoritePrime(7)]);
}

#[test]
fn remove_absent_value_still_logs() {
    let state = AppReducer::reduce(
        with_favorites(0, &[3, 7, 11]),
        AppIntent::RemoveFavoritePrime { prime: 5, at: at(1) },
    );
    assert_eq!(state.favorite_primes, vec![3, 7, 11]);
    assert_eq!(kinds(&state), vec![ActivityKind::RemovedFavoritePrime(5)]);
}

#[test]
fn remove_current_uses_count_not_last_added() {
    let state = AppReducer::reduce(
        with_favorites(3, &[3, 5]),
        AppIntent::RemoveCurrentFavoritePrime { at: at(1) },
    );
    assert_eq!(state.favorite_primes, vec![5]);
    assert_eq!(kinds(&state), vec![ActivityKind::RemovedFavoritePrime(3)]);
}

#[test]
fn remove_at_positions_resolves_values_first() {
    let state = AppReducer::reduce(
        with_favorites(0, &[2, 3, 5, 7]),
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([0, 2]),
            at: at(1),
        },
    );
    assert_eq!(state.favorite_primes, vec![3, 7]);
    assert_eq!(
        kinds(&state),
        vec![
            ActivityKind::RemovedFavoritePrime(2),
            ActivityKind::RemovedFavoritePrime(5),
        ]
    );
}

#[test]
fn remove_at_positions_logs_in_ascending_order() {
    let state = AppReducer::reduce(
        with_favorites(0, &[2, 3, 5, 7]),
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([3, 1]),
            at: at(1),
        },
    );
    assert_eq!(state.favorite_primes, vec![2, 5]);
    assert_eq!(
        kinds(&state),
        vec![
            ActivityKind::RemovedFavoritePrime(3),
            ActivityKind::RemovedFavoritePrime(7),
        ]
    );
}

#[test]
fn remove_at_positions_with_duplicate_values() {
    // Both positions hold 7: the first removal takes every 7, the second
    // finds nothing but is still logged.
    let state = AppReducer::reduce(
        with_favorites(0, &[7, 3, 7]),
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([0, 2]),
            at: at(1),
        },
    );
    assert_eq!(state.favorite_primes, vec![3]);
    assert_eq!(
        kinds(&state),
        vec![
            ActivityKind::RemovedFavoritePrime(7),
            ActivityKind::RemovedFavoritePrime(7),
        ]
    );
}

#[test]
fn remove_at_out_of_range_positions_is_skipped() {
    let state = AppReducer::reduce(
        with_favorites(0, &[2, 3]),
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([1, 5]),
            at: at(1),
        },
    );
    assert_eq!(state.favorite_primes, vec![2]);
    assert_eq!(kinds(&state), vec![ActivityKind::RemovedFavoritePrime(3)]);
}

#[test]
fn activity_feed_never_shrinks() {
    let intents = vec![
        AppIntent::IncrementCount,
        AppIntent::IncrementCount,
        AppIntent::AddFavoritePrime { at: at(1) },
        AppIntent::RemoveFavoritePrime { prime: 2, at: at(2) },
        AppIntent::DecrementCount,
        AppIntent::RemoveCurrentFavoritePrime { at: at(3) },
        AppIntent::AddFavoritePrime { at: at(4) },
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([0]),
            at: at(5),
        },
        AppIntent::RemoveFavoritePrimesAt {
            positions: BTreeSet::from([9]),
            at: at(6),
        },
    ];

    let mut state = AppState::default();
    let mut previous = 0;
    for intent in intents {
        state = AppReducer::reduce(state, intent);
        assert!(state.activity_feed.len() >= previous);
        previous = state.activity_feed.len();
    }
    assert_eq!(previous, 5);
}

#[test]
fn logged_in_user_is_untouched() {
    let state = AppReducer::reduce(
        AppState::with_count(5),
        AppIntent::AddFavoritePrime { at: at(1) },
    );
    assert!(state.logged_in_user.is_none());
}
