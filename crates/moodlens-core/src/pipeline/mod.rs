//! Pipeline orchestration: input → caption → classify → persist.
//!
//! One interaction runs to completion before the next is accepted; the only
//! shared resource is the record file.

use crate::caption::CaptionResolver;
use crate::error::PipelineError;
use crate::inference::TextClassifier;
use crate::store::RecordStore;
use crate::types::{combine, Classification, PipelineOutcome, SentimentRecord};
use std::sync::Arc;

/// The full classify-and-record flow.
///
/// All collaborators are constructor-injected so tests can substitute fakes
/// for the remote services and point the store at a scratch file.
pub struct SentimentPipeline {
    resolver: CaptionResolver,
    classifier: Arc<dyn TextClassifier>,
    store: RecordStore,
}

impl SentimentPipeline {
    pub fn new(
        resolver: CaptionResolver,
        classifier: Arc<dyn TextClassifier>,
        store: RecordStore,
    ) -> Self {
        Self {
            resolver,
            classifier,
            store,
        }
    }

    /// Run one interaction end to end.
    ///
    /// Empty inputs are rejected before anything is resolved or persisted.
    /// A classifier failure degrades to the ERROR sentinel, and the record is
    /// still appended with the attempted combined input.
    pub async fn run(
        &self,
        caption_input: &str,
        user_text: &str,
    ) -> Result<PipelineOutcome, PipelineError> {
        if caption_input.trim().is_empty() {
            return Err(PipelineError::EmptyInput { field: "caption" });
        }
        if user_text.trim().is_empty() {
            return Err(PipelineError::EmptyInput { field: "text" });
        }

        let caption = self.resolver.resolve(caption_input).await;
        let combined = combine(&caption, user_text);

        let classification = match self.classifier.classify(&combined).await {
            Ok(score) => {
                tracing::debug!(label = %score.label, score = score.score, "Classified input");
                Classification::from_score(score)
            }
            Err(e) => {
                tracing::warn!("Classification failed: {e} — recording ERROR sentinel");
                Classification::sentinel(e.to_string())
            }
        };

        let record = SentimentRecord::new(&caption, user_text, &classification);
        self.store.append(&record)?;

        Ok(PipelineOutcome {
            record,
            classification,
        })
    }

    /// All stored records, oldest first.
    pub fn records(&self) -> Result<Vec<SentimentRecord>, PipelineError> {
        self.store.load_all()
    }

    /// Path of the backing record file, for display.
    pub fn records_path(&self) -> &std::path::Path {
        self.store.path()
    }
}
