//! Core data types for the sentiment classification pipeline.
//!
//! These types flow through one interaction: a caption and user text are
//! combined, classified, and persisted as a record.

use serde::{Deserialize, Serialize};

/// Label recorded when the remote classifier could not produce a result.
pub const ERROR_LABEL: &str = "ERROR";

/// Top-ranked label and confidence returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Sentiment label (e.g., "positive", "negative", "neutral")
    pub label: String,

    /// Confidence score from 0.0 to 1.0
    pub score: f32,
}

/// The outcome of one classify call.
///
/// Remote failures never propagate past the pipeline boundary: they degrade
/// into a sentinel value with label `"ERROR"`, score `0.0`, and the failure
/// message in `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Sentiment label, or `"ERROR"` for the failure sentinel
    pub label: String,

    /// Confidence score from 0.0 to 1.0, or 0.0 for the failure sentinel
    pub score: f32,

    /// Failure message when the remote call did not succeed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Classification {
    /// Wrap a successful classifier result.
    pub fn from_score(score: SentimentScore) -> Self {
        Self {
            label: score.label,
            score: score.score,
            error: None,
        }
    }

    /// Build the failure sentinel carrying the error message.
    pub fn sentinel(message: impl Into<String>) -> Self {
        Self {
            label: ERROR_LABEL.to_string(),
            score: 0.0,
            error: Some(message.into()),
        }
    }

    /// Whether this classification is the failure sentinel.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One stored row: the caption, the user text, the combined input that was
/// actually classified, and the classifier's verdict.
///
/// Records are append-only and insertion-ordered; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub image_caption: String,
    pub user_text: String,
    pub combined_input: String,
    pub label: String,
    pub score: f32,
}

impl SentimentRecord {
    /// Build a record from the caption, user text, and classification verdict.
    pub fn new(caption: &str, user_text: &str, classification: &Classification) -> Self {
        Self {
            image_caption: caption.to_string(),
            user_text: user_text.to_string(),
            combined_input: combine(caption, user_text),
            label: classification.label.clone(),
            score: classification.score,
        }
    }
}

/// Build the combined input exactly as the classifier sees it:
/// `"{caption}. {user_text}"`, trimmed on the combined value only.
pub fn combine(caption: &str, user_text: &str) -> String {
    format!("{caption}. {user_text}").trim().to_string()
}

/// What one full pipeline run produced, for rendering.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The record that was appended to the store
    pub record: SentimentRecord,

    /// The classification behind it (including any sentinel error message)
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_joins_with_period_and_space() {
        assert_eq!(combine("a cat", "I love this"), "a cat. I love this");
    }

    #[test]
    fn test_combine_trims_combined_value_only() {
        // Interior whitespace survives; only the ends are trimmed
        assert_eq!(combine("  a cat ", " hello  "), "a cat . hello");
    }

    #[test]
    fn test_sentinel_shape() {
        let c = Classification::sentinel("connection refused");
        assert_eq!(c.label, ERROR_LABEL);
        assert_eq!(c.score, 0.0);
        assert_eq!(c.error.as_deref(), Some("connection refused"));
        assert!(c.is_error());
    }

    #[test]
    fn test_from_score_is_not_error() {
        let c = Classification::from_score(SentimentScore {
            label: "positive".to_string(),
            score: 0.95,
        });
        assert_eq!(c.label, "positive");
        assert!(!c.is_error());
    }

    #[test]
    fn test_classification_serde_skips_none_error() {
        let c = Classification::from_score(SentimentScore {
            label: "negative".to_string(),
            score: 0.7,
        });
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("error"));

        let s = Classification::sentinel("boom");
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"error\":\"boom\""));
    }

    #[test]
    fn test_record_carries_classification_verdict() {
        let c = Classification::from_score(SentimentScore {
            label: "positive".to_string(),
            score: 0.95,
        });
        let record = SentimentRecord::new("a cat sitting on a couch", "I love this", &c);
        assert_eq!(record.combined_input, "a cat sitting on a couch. I love this");
        assert_eq!(record.label, "positive");
        assert_eq!(record.score, 0.95);
    }
}
