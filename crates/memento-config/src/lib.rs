/// Application configuration for the memento workspace.
///
/// Loaded once at startup and passed down explicitly; nothing in here is a
/// process-wide global.
pub mod config;

pub use config::{AppConfig, CONFIG_ENV_VAR};
