use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::types::Config;
use crate::viewmodel::MAX_CHANNEL_CAPACITY;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shopcart/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shopcart").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The state channel holds between 1 and `MAX_CHANNEL_CAPACITY` snapshots
    /// - Seed item ids are unique
    /// - Seed item prices are not negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.state.channel_capacity;
        if !(1..=MAX_CHANNEL_CAPACITY).contains(&capacity) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "state.channel_capacity must be between 1 and {}, got {}",
                    MAX_CHANNEL_CAPACITY, capacity
                ),
            });
        }

        let mut seen = HashSet::new();
        for item in &self.source.items {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate cart item id '{}'", item.id),
                });
            }
            if item.price < Decimal::ZERO {
                return Err(ConfigError::ValidationError {
                    message: format!("Cart item '{}' has negative price {}", item.id, item.price),
                });
            }
        }

        Ok(())
    }
}
