//! Terminal UI over the application store.

pub mod app;
pub mod counter;
pub mod events;
pub mod favorites;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
