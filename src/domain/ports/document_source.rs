//! DocumentSource port
//!
//! Yields the already-parsed compliance documents to compile, in the order
//! they should be merged. Later documents override earlier ones.

use std::path::PathBuf;

use crate::domain::entities::ComplianceDocument;

pub trait DocumentSource: Send + Sync {
    /// Enumerate documents. Individual unreadable documents are skipped by the
    /// source; an error means no document set could be produced at all.
    fn documents(&self) -> Result<Vec<ComplianceDocument>, DocumentLoadError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentLoadError {
    #[error("Compliance data path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Permission denied reading compliance data: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to load compliance documents: {message}")]
    LoadFailed { message: String },
}
