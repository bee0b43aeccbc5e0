//! Sub-configuration structs with defaults matching the hosted demo models.

use serde::{Deserialize, Serialize};

/// Remote inference settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Inference API base URL
    pub endpoint: String,

    /// API token (supports ${ENV_VAR} syntax). A missing token is not a
    /// startup failure; unauthenticated calls surface as the ERROR sentinel.
    pub api_token: String,

    /// Text-classification model id
    pub sentiment_model: String,

    /// Image-to-text model id
    pub caption_model: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co".to_string(),
            api_token: "${HF_API_TOKEN}".to_string(),
            sentiment_model: "cardiffnlp/twitter-roberta-base-sentiment-latest".to_string(),
            caption_model: "Salesforce/blip-image-captioning-base".to_string(),
        }
    }
}

/// Caption resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Longest edge of the downscaled copy sent to the captioning model
    pub max_dimension: u32,

    /// File extensions treated as images (matched case-insensitively)
    pub image_extensions: Vec<String>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_dimension: 256,
            image_extensions: vec![
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "bmp".to_string(),
                "gif".to_string(),
            ],
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the CSV record table (~ is expanded)
    pub records_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            records_path: "records.csv".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
