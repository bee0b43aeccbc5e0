//! Inference traits and the token resolution helper.
//!
//! The pipeline depends on these seams rather than a concrete HTTP client,
//! so tests can substitute fakes for the remote services.

use crate::error::PipelineError;
use crate::types::SentimentScore;
use async_trait::async_trait;

/// Classifies text into a sentiment label with a confidence score.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the pipeline holds `Arc<dyn TextClassifier>`).
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Implementation name for logging (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Classify `text` and return the top-ranked label and score.
    ///
    /// A single best-effort call: no retries, no rate-limit handling.
    async fn classify(&self, text: &str) -> Result<SentimentScore, PipelineError>;
}

/// Generates a natural-language caption for an image.
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Implementation name for logging.
    fn name(&self) -> &str;

    /// Caption the given encoded image bytes.
    async fn caption(&self, image: &[u8], media_type: &str) -> Result<String, PipelineError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-token"), Some("plain-token".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }
}
