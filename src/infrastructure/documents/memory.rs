//! In-memory document source

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::ComplianceDocument;
use crate::domain::ports::{DocumentLoadError, DocumentSource};

/// Serves a fixed document list and counts how often it was asked
#[derive(Debug, Default)]
pub struct MemoryDocumentSource {
    documents: Vec<ComplianceDocument>,
    loads: AtomicUsize,
}

impl MemoryDocumentSource {
    pub fn new(documents: Vec<ComplianceDocument>) -> Self {
        Self {
            documents,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times [`DocumentSource::documents`] has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn documents(&self) -> Result<Vec<ComplianceDocument>, DocumentLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.clone())
    }
}
