//! Model-View-Intent primitives shared by the application store and the
//! view-local screen state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next value
//! - **Intent**: a user action or a completed side effect
//! - **Reducer**: `(State, Intent) -> State`, no I/O and no clock reads

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
