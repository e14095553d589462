use crate::mvi::UiState;
use std::time::SystemTime;

/// Placeholder for the signed-in user. Nothing populates it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    AddedFavoritePrime(i64),
    RemovedFavoritePrime(i64),
}

impl ActivityKind {
    pub fn prime(&self) -> i64 {
        match self {
            Self::AddedFavoritePrime(p) | Self::RemovedFavoritePrime(p) => *p,
        }
    }

    pub fn is_addition(&self) -> bool {
        matches!(self, Self::AddedFavoritePrime(_))
    }
}

/// One entry in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub timestamp: SystemTime,
    pub kind: ActivityKind,
}

/// Application-wide state: the counter, the favorite primes and the
/// activity feed derived from changes to them.
///
/// `activity_feed` only ever grows. Every change to `favorite_primes`
/// is recorded there by the same reduction that made it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub count: i64,
    pub favorite_primes: Vec<i64>,
    pub activity_feed: Vec<Activity>,
    pub logged_in_user: Option<User>,
}

impl UiState for AppState {}

impl AppState {
    /// Fresh state with the counter at `count` and empty collections.
    pub fn with_count(count: i64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn is_favorite(&self, prime: i64) -> bool {
        self.favorite_primes.contains(&prime)
    }

    pub fn last_activity(&self) -> Option<&Activity> {
        self.activity_feed.last()
    }
}
