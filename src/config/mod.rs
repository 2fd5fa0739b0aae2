//! Application configuration.
//!
//! Loaded once at startup from `config.toml` and passed down explicitly;
//! nothing here is process-global.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, ApiConfig, Config, UiConfig};
