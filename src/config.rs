//! # Configuration Management Module
//!
//! Persistent application settings stored in platform-appropriate locations.
//! Handles loading, saving, and providing defaults for configuration options.
//!
//! ## Settings
//! - `window_width` / `window_height`: Initial window size in logical pixels
//! - `bid_step_millis`: Delay between the five bidding-session increments
//!
//! ## Storage Location
//! - macOS: ~/Library/Application Support/mta-demo/config.toml
//! - Linux: ~/.config/mta-demo/config.toml
//! - Windows: %APPDATA%\mta-demo\config.toml
//!
//! Demo form submissions are never persisted; this file only carries
//! presentation settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub bid_step_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            bid_step_millis: 500,
        }
    }
}

impl Config {
    /// Get the path to the config file
    fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mta-demo").join("config.toml")
    }

    /// Load config from file, or create default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = toml::from_str(&contents).map_err(ConfigError::ParseFailed)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File doesn't exist, create default
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::ReadFailed(e)),
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;
        fs::write(&path, toml_string).map_err(ConfigError::WriteFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.bid_step_millis, 500);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            window_width: 1024.0,
            window_height: 768.0,
            bid_step_millis: 250,
        };

        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("window_width = 1024.0"));
        assert!(toml_str.contains("bid_step_millis = 250"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            window_width = 1600.0
            window_height = 900.0
            bid_step_millis = 100
        "#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.window_width, 1600.0);
        assert_eq!(config.bid_step_millis, 100);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Older or hand-edited files may omit fields
        let config: Config = toml::from_str("bid_step_millis = 50").expect("Failed to deserialize");
        assert_eq!(config.bid_step_millis, 50);
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 800.0);
    }
}
