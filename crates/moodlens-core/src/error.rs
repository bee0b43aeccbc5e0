//! Error types for the Moodlens sentiment pipeline.
//!
//! Errors are organized by stage so messages carry the context that matters:
//! file paths for local failures, HTTP status codes for remote ones.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Moodlens operations.
#[derive(Error, Debug)]
pub enum MoodlensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Scratch file handling failed while preparing a captioning input
    #[error("Scratch file error: {message}")]
    Scratch { message: String },

    /// Remote caption generation failed
    #[error("Caption error: {message}")]
    Caption {
        message: String,
        status_code: Option<u16>,
    },

    /// Remote sentiment classification failed
    #[error("Classification error: {message}")]
    Classify {
        message: String,
        status_code: Option<u16>,
    },

    /// Record table read or write failed
    #[error("Record store error for {path}: {message}")]
    Store { path: PathBuf, message: String },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A required input was empty or whitespace
    #[error("Missing {field}: both a caption (image or text) and additional text are required")]
    EmptyInput { field: &'static str },
}

/// Convenience type alias for Moodlens results.
pub type Result<T> = std::result::Result<T, MoodlensError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
