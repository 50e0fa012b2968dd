//! Domain Ports (Interfaces)
//!
//! These traits define what the compiler needs from its host.
//! Infrastructure layer provides concrete implementations.

pub mod debug_sink;
pub mod document_source;
pub mod fact_store;
pub mod host_lookup;
pub mod lookup_cache;
pub mod module_inventory;

pub use debug_sink::{DebugSink, NoopDebugSink};
pub use document_source::{DocumentLoadError, DocumentSource};
pub use fact_store::FactStore;
pub use host_lookup::HostLookup;
pub use lookup_cache::LookupCache;
pub use module_inventory::ModuleInventory;
