//! Moodlens Core - image & text sentiment pipeline library.
//!
//! Moodlens takes an image (or a manually supplied caption) plus free-form
//! text, resolves a caption, classifies the combined text's sentiment via a
//! hosted model, and appends the result to a CSV record table.
//!
//! # Architecture
//!
//! ```text
//! Input → Resolve caption → Classify combined text → Append record
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use moodlens_core::{build_pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> moodlens_core::Result<()> {
//!     let config = Config::load()?;
//!     let pipeline = build_pipeline(&config);
//!
//!     let outcome = pipeline.run("./cat.jpg", "I love this").await?;
//!     println!("{}: {:.2}%", outcome.record.label, outcome.record.score * 100.0);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod caption;
pub mod config;
pub mod error;
pub mod inference;
pub mod pipeline;
pub mod store;
pub mod types;

// Re-exports for convenient access
pub use caption::CaptionResolver;
pub use config::Config;
pub use error::{ConfigError, MoodlensError, PipelineError, PipelineResult, Result};
pub use inference::{Captioner, HfInferenceClient, TextClassifier};
pub use pipeline::SentimentPipeline;
pub use store::RecordStore;
pub use types::{Classification, PipelineOutcome, SentimentRecord, SentimentScore};

use std::sync::Arc;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire a pipeline from configuration: one shared HTTP client serves both
/// remote models, feeding the caption resolver and the classifier seam.
pub fn build_pipeline(config: &Config) -> SentimentPipeline {
    let client = Arc::new(HfInferenceClient::from_config(&config.inference));
    let resolver = CaptionResolver::new(client.clone(), config.caption.clone());
    let store = RecordStore::new(config.records_path());
    SentimentPipeline::new(resolver, client, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_build_pipeline_uses_configured_store_path() {
        let mut config = Config::default();
        config.store.records_path = "/tmp/moodlens-test-records.csv".to_string();
        let pipeline = build_pipeline(&config);
        assert_eq!(
            pipeline.records_path(),
            std::path::Path::new("/tmp/moodlens-test-records.csv")
        );
    }
}
