//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.endpoint must not be empty".into(),
            ));
        }
        if self.inference.sentiment_model.is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.sentiment_model must not be empty".into(),
            ));
        }
        if self.inference.caption_model.is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.caption_model must not be empty".into(),
            ));
        }
        if self.caption.max_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "caption.max_dimension must be > 0".into(),
            ));
        }
        if self.caption.image_extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "caption.image_extensions must not be empty".into(),
            ));
        }
        if self.store.records_path.is_empty() {
            return Err(ConfigError::ValidationError(
                "store.records_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
