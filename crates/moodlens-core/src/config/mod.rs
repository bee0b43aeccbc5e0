//! Configuration management for Moodlens.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; a missing file means defaults, never an error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Moodlens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote inference settings
    pub inference: InferenceConfig,

    /// Caption resolver settings
    pub caption: CaptionConfig,

    /// Record store settings
    pub store: StoreConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.moodlens.moodlens/config.toml
    /// - Linux: ~/.config/moodlens/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\moodlens\config\config.toml
    ///
    /// Falls back to ~/.moodlens/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "moodlens", "moodlens")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".moodlens").join("config.toml")
            })
    }

    /// Get the resolved record table path (with ~ expansion).
    pub fn records_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.store.records_path);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.caption.max_dimension, 256);
        assert_eq!(config.store.records_path, "records.csv");
        assert!(config
            .inference
            .sentiment_model
            .contains("twitter-roberta-base-sentiment"));
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[inference]"));
        assert!(toml.contains("[caption]"));
        assert!(toml.contains("[store]"));
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nrecords_path = \"/tmp/demo.csv\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.store.records_path, "/tmp/demo.csv");
        // Untouched sections keep their defaults
        assert_eq!(config.caption.max_dimension, 256);
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_records_path_expands_tilde() {
        let mut config = Config::default();
        config.store.records_path = "~/moodlens/records.csv".to_string();
        let path = config.records_path();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
