//! Application state: the counter, favorite primes and activity feed.

mod intent;
mod reducer;
mod store;
mod types;

pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use store::{Store, Subscription};
pub use types::{Activity, ActivityKind, AppState, User};
