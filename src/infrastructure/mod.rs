//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `documents/` - Document sources (filesystem, in-memory) and parsing
//! - `facts/` - Fact stores
//! - `modules/` - Module inventories
//! - `cache/` - Lookup cache
//! - `host/` - Host-side lookup and debug output

pub mod cache;
pub mod documents;
pub mod facts;
pub mod host;
pub mod modules;

pub use cache::MemoryCache;
pub use documents::{FsDocumentSource, MemoryDocumentSource};
pub use facts::StaticFactStore;
pub use host::{StaticLookup, TracingDebugSink};
pub use modules::{FsModuleInventory, StaticModuleInventory};
