use std::time::SystemTime;

use crate::mvi::Reducer;

use super::intent::AppIntent;
use super::types::{Activity, ActivityKind, AppState};

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::IncrementCount => {
                state.count = state.count.saturating_add(1);
            }
            AppIntent::DecrementCount => {
                state.count = state.count.saturating_sub(1);
            }
            AppIntent::AddFavoritePrime { at } => {
                let prime = state.count;
                state.favorite_primes.push(prime);
                log(&mut state, at, ActivityKind::AddedFavoritePrime(prime));
            }
            AppIntent::RemoveFavoritePrime { prime, at } => {
                remove_all(&mut state, prime, at);
            }
            AppIntent::RemoveCurrentFavoritePrime { at } => {
                let prime = state.count;
                remove_all(&mut state, prime, at);
            }
            AppIntent::RemoveFavoritePrimesAt { positions, at } => {
                // Resolve every value first so earlier removals cannot shift
                // the positions of later ones. BTreeSet iterates ascending.
                let values: Vec<i64> = positions
                    .iter()
                    .filter_map(|&index| state.favorite_primes.get(index).copied())
                    .collect();
                for prime in values {
                    remove_all(&mut state, prime, at);
                }
            }
        }
        state
    }
}

fn remove_all(state: &mut AppState, prime: i64, at: SystemTime) {
    state.favorite_primes.retain(|&p| p != prime);
    log(state, at, ActivityKind::RemovedFavoritePrime(prime));
}

fn log(state: &mut AppState, timestamp: SystemTime, kind: ActivityKind) {
    state.activity_feed.push(Activity { timestamp, kind });
}
