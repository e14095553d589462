use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::lookup::{lookup_nth_prime, PrimeLookup};
use crate::mvi::Reducer;
use crate::prime::is_prime;
use crate::state::Store;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterViewState};
use crate::ui::events::AppEvent;
use crate::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesViewState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Home,
    Counter,
    Favorites,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "State Management",
            Screen::Counter => "Counter Demo",
            Screen::Favorites => "Favorite Primes",
        }
    }
}

/// Entries of the home menu, in display order.
pub const HOME_ITEMS: [Screen; 2] = [Screen::Counter, Screen::Favorites];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Screen stack and view-local state around the application store.
///
/// Persistent data lives in the [`Store`]; `App` only keeps what a view
/// would forget when it is closed.
pub struct App {
    should_quit: bool,
    screen: Screen,
    home_selection: usize,
    size: Option<(u16, u16)>,
    store: Store,
    counter: CounterViewState,
    favorites: FavoritesViewState,
    lookup: Arc<dyn PrimeLookup>,
    runtime: Handle,
    events: Sender<AppEvent>,
    next_request_id: u64,
}

impl App {
    pub fn new(
        store: Store,
        lookup: Arc<dyn PrimeLookup>,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            home_selection: 0,
            size: None,
            store,
            counter: CounterViewState::default(),
            favorites: FavoritesViewState::default(),
            lookup,
            runtime,
            events,
            next_request_id: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn counter(&self) -> &CounterViewState {
        &self.counter
    }

    pub fn favorites(&self) -> &FavoritesViewState {
        &self.favorites
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {}

    // -- Navigation -----------------------------------------------------------

    pub fn home_selection(&self) -> usize {
        self.home_selection
    }

    pub fn move_home_selection(&mut self, delta: isize) {
        let len = HOME_ITEMS.len() as isize;
        self.home_selection = (self.home_selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn open_selected(&mut self) {
        self.open(HOME_ITEMS[self.home_selection]);
    }

    pub fn open(&mut self, screen: Screen) {
        tracing::debug!(?screen, "Opening screen");
        self.screen = screen;
    }

    /// Leave the current screen, dropping its view-local state.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Home => self.request_quit(),
            Screen::Counter => {
                dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Leave);
                self.screen = Screen::Home;
            }
            Screen::Favorites => {
                dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::Leave);
                self.screen = Screen::Home;
            }
        }
    }

    // -- Counter ----------------------------------------------------------------

    pub fn increment(&mut self) {
        self.store.increment_count();
    }

    pub fn decrement(&mut self) {
        self.store.decrement_count();
    }

    pub fn show_prime_modal(&mut self) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::ShowPrimeModal);
    }

    pub fn dismiss_prime_modal(&mut self) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::DismissPrimeModal);
    }

    /// Save the current count. Only offered when it is a prime that is not
    /// already a favorite.
    pub fn save_current_prime(&mut self) {
        let (count, favorite) = self.store.read(|s| (s.count, s.is_favorite(s.count)));
        if is_prime(count) && !favorite {
            self.store.add_favorite_prime();
        }
    }

    /// Remove the current count. Only offered when it is a favorite prime.
    pub fn remove_current_prime(&mut self) {
        let (count, favorite) = self.store.read(|s| (s.count, s.is_favorite(s.count)));
        if is_prime(count) && favorite {
            self.store.remove_current_favorite_prime();
        }
    }

    /// Ask for the nth prime, where n is the current count.
    ///
    /// Disabled while a lookup is already in flight. The answer arrives later
    /// as [`AppEvent::NthPrime`] and goes through [`App::on_nth_prime`].
    pub fn request_nth_prime(&mut self) {
        if self.counter.is_lookup_in_flight() {
            return;
        }
        let n = self.store.count();
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        dispatch_mvi!(
            self,
            counter,
            CounterReducer,
            CounterIntent::LookupStarted { request_id, n }
        );

        tracing::info!(n, request_id, "Requesting nth prime");
        let lookup = Arc::clone(&self.lookup);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let prime = lookup_nth_prime(&*lookup, n).await;
            // The UI may already be gone; nobody to tell then.
            let _ = events.send(AppEvent::NthPrime { request_id, prime });
        });
    }

    pub fn on_nth_prime(&mut self, request_id: u64, prime: Option<i64>) {
        if !self.counter.awaits(request_id) {
            tracing::debug!(request_id, "Dropping stale nth prime result");
        }
        dispatch_mvi!(
            self,
            counter,
            CounterReducer,
            CounterIntent::LookupFinished { request_id, prime }
        );
    }

    pub fn dismiss_alert(&mut self) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::DismissAlert);
    }

    // -- Favorites --------------------------------------------------------------

    fn favorites_len(&self) -> usize {
        self.store.read(|s| s.favorite_primes.len())
    }

    pub fn move_favorite_selection(&mut self, delta: isize) {
        let len = self.favorites_len();
        let intent = if delta < 0 {
            FavoritesIntent::MoveUp { len }
        } else {
            FavoritesIntent::MoveDown { len }
        };
        dispatch_mvi!(self, favorites, FavoritesReducer, intent);
    }

    pub fn toggle_favorite_mark(&mut self) {
        let len = self.favorites_len();
        dispatch_mvi!(
            self,
            favorites,
            FavoritesReducer,
            FavoritesIntent::ToggleMark { len }
        );
    }

    /// Remove the marked positions, or the selected one if none is marked.
    pub fn remove_selected_favorites(&mut self) {
        let positions = self.favorites.removal_positions(self.favorites_len());
        if positions.is_empty() {
            return;
        }
        self.store.remove_favorite_primes_at(positions);
        let len = self.favorites_len();
        dispatch_mvi!(
            self,
            favorites,
            FavoritesReducer,
            FavoritesIntent::ListChanged { len }
        );
    }
}
