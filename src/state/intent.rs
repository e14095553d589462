use crate::mvi::Intent;
use std::collections::BTreeSet;
use std::time::SystemTime;

/// Mutations of [`AppState`](super::AppState).
///
/// Intents that append to the activity feed carry the timestamp to record.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    IncrementCount,
    DecrementCount,
    /// Append the current count to the favorites.
    AddFavoritePrime { at: SystemTime },
    /// Remove every occurrence of `prime`. Logged even if nothing matched.
    RemoveFavoritePrime { prime: i64, at: SystemTime },
    /// Same as `RemoveFavoritePrime` with the current count.
    RemoveCurrentFavoritePrime { at: SystemTime },
    /// Remove the values found at `positions`, resolved before any removal.
    RemoveFavoritePrimesAt {
        positions: BTreeSet<usize>,
        at: SystemTime,
    },
}

impl Intent for AppIntent {}
