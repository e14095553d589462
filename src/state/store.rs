//! Store owning the application state.
//!
//! The store is created by the composition root and handed to whoever needs
//! it; clones share the same state. Every mutation goes through
//! [`Store::dispatch`], which runs the reducer under the state lock and then
//! notifies subscribers with the new state, outside of any lock.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::SystemTime;

use parking_lot::Mutex;

use crate::mvi::Reducer;

use super::intent::AppIntent;
use super::reducer::AppReducer;
use super::types::AppState;

type Listener = dyn Fn(&AppState) + Send + Sync;

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<AppState>,
    /// Registration order is notification order.
    listeners: Mutex<Vec<(u64, Arc<Listener>)>>,
    next_listener_id: AtomicU64,
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        tracing::info!(count = initial.count, "Store created");
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.inner.state.lock().clone()
    }

    /// Borrow the current state without cloning it.
    ///
    /// Do not dispatch from inside `f`; the state lock is held.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.lock())
    }

    pub fn count(&self) -> i64 {
        self.read(|state| state.count)
    }

    /// Register `listener`, called with the new state after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Apply `intent` and notify subscribers.
    pub fn dispatch(&self, intent: AppIntent) {
        tracing::debug!(?intent, "Dispatching intent");
        let next = {
            let mut state = self.inner.state.lock();
            *state = AppReducer::reduce(std::mem::take(&mut *state), intent);
            state.clone()
        };

        let listeners: Vec<Arc<Listener>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    pub fn increment_count(&self) {
        self.dispatch(AppIntent::IncrementCount);
    }

    pub fn decrement_count(&self) {
        self.dispatch(AppIntent::DecrementCount);
    }

    pub fn add_favorite_prime(&self) {
        self.dispatch(AppIntent::AddFavoritePrime {
            at: SystemTime::now(),
        });
    }

    pub fn remove_favorite_prime(&self, prime: i64) {
        self.dispatch(AppIntent::RemoveFavoritePrime {
            prime,
            at: SystemTime::now(),
        });
    }

    /// Removes the current count from the favorites, which is not
    /// necessarily the most recently added prime.
    pub fn remove_current_favorite_prime(&self) {
        self.dispatch(AppIntent::RemoveCurrentFavoritePrime {
            at: SystemTime::now(),
        });
    }

    pub fn remove_favorite_primes_at(&self, positions: impl IntoIterator<Item = usize>) {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        if positions.is_empty() {
            return;
        }
        self.dispatch(AppIntent::RemoveFavoritePrimesAt {
            positions,
            at: SystemTime::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let other = store.clone();
        other.increment_count();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn listener_may_read_store() {
        let store = Store::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let reader = store.clone();
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| sink.lock().push(reader.count()));

        store.increment_count();
        store.increment_count();

        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[test]
    fn empty_position_set_is_not_dispatched() {
        let store = Store::default();
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let _sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        store.remove_favorite_primes_at(Vec::new());

        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(store.snapshot().activity_feed.is_empty());
    }
}
