//! Error types for compliance markup
//!
//! Uses `thiserror` for library errors. Everything below the enforcement
//! backend may return these; the backend converts them into a not-found
//! lookup so a broken document set never breaks the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compliance markup operations
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Main error type for compliance markup operations
#[derive(Error, Debug)]
pub enum MarkupError {
    /// A check targets a parameter but never assigns it a value
    #[error("check '{check}' sets parameter '{parameter}' but has no value")]
    MissingCheckValue { check: String, parameter: String },

    /// An entry carries a `confine` that is not a mapping and has no fallback value
    #[error("entry '{entry}' has a 'confine' that is not a mapping")]
    InvalidConfine { entry: String },

    /// Two specifications disagree on the shape of a merged field
    #[error("type mismatch merging '{field}' for parameter '{parameter}': existing {existing}, incoming {incoming}")]
    MergeTypeMismatch {
        parameter: String,
        field: String,
        existing: &'static str,
        incoming: &'static str,
    },

    /// A compliance document could not be decoded
    #[error("invalid compliance document {source_id}: {message}")]
    DocumentParse { source_id: String, message: String },

    /// The document source could not produce a document set
    #[error(transparent)]
    DocumentLoad(#[from] crate::domain::ports::DocumentLoadError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
