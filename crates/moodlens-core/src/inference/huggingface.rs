//! Hugging Face Inference API client.
//!
//! One reqwest client serves both hosted models: text classification posts a
//! JSON body, image captioning posts raw image bytes. Every call is a single
//! best-effort request — no retry or timeout layering on top.

use super::provider::{resolve_env_var, Captioner, TextClassifier};
use crate::config::InferenceConfig;
use crate::error::PipelineError;
use crate::types::SentimentScore;
use async_trait::async_trait;
use serde::Deserialize;

/// Client for the hosted text-classification and image-to-text models.
pub struct HfInferenceClient {
    endpoint: String,
    api_token: Option<String>,
    sentiment_model: String,
    caption_model: String,
    client: reqwest::Client,
}

impl HfInferenceClient {
    pub fn new(
        endpoint: &str,
        api_token: Option<String>,
        sentiment_model: &str,
        caption_model: &str,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_token,
            sentiment_model: sentiment_model.to_string(),
            caption_model: caption_model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from config, resolving `${ENV_VAR}` token references.
    ///
    /// An unresolvable token is allowed; the calls will fail and surface as
    /// the ERROR sentinel rather than preventing startup.
    pub fn from_config(config: &InferenceConfig) -> Self {
        let token = resolve_env_var(&config.api_token);
        if token.is_none() {
            tracing::warn!("No inference API token configured — remote calls may be rejected");
        }
        Self::new(
            &config.endpoint,
            token,
            &config.sentiment_model,
            &config.caption_model,
        )
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.endpoint, model)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }
}

// --- Response types ---

/// A single {label, score} entry from the classification endpoint.
#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

/// The classification endpoint returns either a flat list of entries or a
/// list nested one level per input; both shapes occur in the wild.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifyResponse {
    /// The top-ranked entry for the first (only) input.
    fn top(self) -> Option<LabelScore> {
        let entries = match self {
            ClassifyResponse::Nested(mut rows) => {
                if rows.is_empty() {
                    return None;
                }
                rows.remove(0)
            }
            ClassifyResponse::Flat(entries) => entries,
        };
        entries
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[derive(Deserialize)]
struct CaptionEntry {
    generated_text: String,
}

#[async_trait]
impl TextClassifier for HfInferenceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore, PipelineError> {
        let body = serde_json::json!({ "inputs": text });

        let resp = self
            .authorize(self.client.post(self.model_url(&self.sentiment_model)))
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Classify {
                message: format!("Classification request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(PipelineError::Classify {
                message: format!("Classification HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let parsed: ClassifyResponse = resp.json().await.map_err(|e| PipelineError::Classify {
            message: format!("Failed to parse classification response: {e}"),
            status_code: None,
        })?;

        let top = parsed.top().ok_or_else(|| PipelineError::Classify {
            message: "Classifier returned no labels".to_string(),
            status_code: None,
        })?;

        Ok(SentimentScore {
            label: top.label,
            score: top.score,
        })
    }
}

#[async_trait]
impl Captioner for HfInferenceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn caption(&self, image: &[u8], media_type: &str) -> Result<String, PipelineError> {
        let resp = self
            .authorize(self.client.post(self.model_url(&self.caption_model)))
            .header("Content-Type", media_type)
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| PipelineError::Caption {
                message: format!("Caption request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(PipelineError::Caption {
                message: format!("Caption HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let entries: Vec<CaptionEntry> = resp.json().await.map_err(|e| PipelineError::Caption {
            message: format!("Failed to parse caption response: {e}"),
            status_code: None,
        })?;

        let first = entries.into_iter().next().ok_or_else(|| PipelineError::Caption {
            message: "Captioning model returned no text".to_string(),
            status_code: None,
        })?;

        Ok(first.generated_text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_response_nested_shape() {
        let json = r#"[[{"label":"positive","score":0.95},{"label":"negative","score":0.03}]]"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        let top = parsed.top().unwrap();
        assert_eq!(top.label, "positive");
        assert_eq!(top.score, 0.95);
    }

    #[test]
    fn test_classify_response_flat_shape() {
        let json = r#"[{"label":"negative","score":0.88},{"label":"positive","score":0.10}]"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        let top = parsed.top().unwrap();
        assert_eq!(top.label, "negative");
    }

    #[test]
    fn test_classify_response_picks_highest_score_regardless_of_order() {
        let json = r#"[{"label":"neutral","score":0.20},{"label":"positive","score":0.75}]"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.top().unwrap().label, "positive");
    }

    #[test]
    fn test_classify_response_empty_is_none() {
        let parsed: ClassifyResponse = serde_json::from_str("[]").unwrap();
        assert!(parsed.top().is_none());
    }

    #[test]
    fn test_caption_entry_parse() {
        let json = r#"[{"generated_text":"a cat sitting on a couch"}]"#;
        let entries: Vec<CaptionEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].generated_text, "a cat sitting on a couch");
    }

    #[test]
    fn test_model_url_strips_trailing_slash() {
        let client = HfInferenceClient::new(
            "https://api-inference.huggingface.co/",
            None,
            "org/sentiment",
            "org/caption",
        );
        assert_eq!(
            client.model_url("org/sentiment"),
            "https://api-inference.huggingface.co/models/org/sentiment"
        );
    }
}
