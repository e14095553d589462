pub mod config;
pub mod logging;
pub mod lookup;
pub mod mvi;
pub mod prime;
pub mod state;
pub mod ui;
