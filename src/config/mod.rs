mod loader;
mod types;

pub use loader::{ConfigError, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
pub use types::{Config, LookupConfig, UiConfig};
