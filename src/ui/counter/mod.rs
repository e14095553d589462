mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterViewState, NthPrimeAlert, PendingLookup};
