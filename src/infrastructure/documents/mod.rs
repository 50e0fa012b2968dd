//! Document sources
//!
//! - `FsDocumentSource` walks module and data directories for YAML/JSON files
//! - `MemoryDocumentSource` serves documents handed to it directly

mod fs_source;
mod memory;
mod parse;

pub use fs_source::{FsDocumentSource, COMPLIANCE_DATA_DIR_ENV, PROFILE_SUBDIRS};
pub use memory::MemoryDocumentSource;
pub use parse::{is_document_file, parse_document, parse_document_str, DocumentFormat};
