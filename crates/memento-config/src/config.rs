/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "MEMENTO_CONFIG";

/// File name used when the config lives next to the executable.
const CONFIG_FILE_NAME: &str = "memento.json";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max undo steps kept per session. 0 = unbounded.
    pub max_history_depth: usize,
    /// Window in milliseconds for merging consecutive commits into one
    /// undo step. 0 = every commit is its own step.
    pub group_timeout_ms: u64,
    /// Content the editor starts with; becomes the history baseline.
    pub initial_text: String,
    /// Whether to print undo/redo depths after each step.
    pub show_depths: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_depth: 10_000,
            group_timeout_ms: 0,
            initial_text: String::new(),
            show_depths: false,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `MEMENTO_CONFIG` environment variable
    /// 2. `memento.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {}: {e:#}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            let mut config = Self::default();
            config.sanitize();
            config
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Reads and sanitizes the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.group_timeout_ms = self.group_timeout_ms.min(60_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_history_depth, 10_000);
        assert_eq!(config.group_timeout_ms, 0);
        assert!(config.initial_text.is_empty());
        assert!(!config.show_depths);
    }

    #[test]
    fn test_sanitize_keeps_unbounded_depth() {
        let mut config = AppConfig {
            max_history_depth: 0,
            ..AppConfig::default()
        };
        config.sanitize();
        assert_eq!(config.max_history_depth, 0);
    }

    #[test]
    fn test_sanitize_clamps_group_timeout() {
        let mut config = AppConfig {
            group_timeout_ms: 3_600_000,
            ..AppConfig::default()
        };
        config.sanitize();
        assert_eq!(config.group_timeout_ms, 60_000);

        config.group_timeout_ms = 250;
        config.sanitize();
        assert_eq!(config.group_timeout_ms, 250);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AppConfig {
            max_history_depth: 42,
            group_timeout_ms: 300,
            initial_text: "draft".to_string(),
            show_depths: true,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let json = r#"{"show_depths": true}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.show_depths);
        assert_eq!(parsed.max_history_depth, 10_000);
        assert_eq!(parsed.group_timeout_ms, 0);
    }

    #[test]
    fn test_config_path_ends_with_file_name_without_env() {
        if std::env::var(CONFIG_ENV_VAR).is_ok() {
            return;
        }
        let path = AppConfig::config_path();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }
}
