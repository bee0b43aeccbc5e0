//! Remote inference over the Hugging Face Inference API.
//!
//! Defines the classifier and captioner seams the pipeline is built against,
//! plus a single HTTP client implementing both against hosted models.

pub(crate) mod huggingface;
pub(crate) mod provider;

pub use huggingface::HfInferenceClient;
pub use provider::{resolve_env_var, Captioner, TextClassifier};
