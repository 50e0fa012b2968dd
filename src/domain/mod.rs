//! Domain Layer
//!
//! This is the core of compliance markup - pure business logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Documents, catalogs, specifications and assignments
//! - `value_objects/` - Immutable value types (fingerprint, lookup key, mode)
//! - `services/` - Confinement, merging, indexing and parameter resolution
//! - `ports/` - Interface definitions for the host integration
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Values, not aliases** - Resolved assignments own deep copies of catalog data
//! 3. **Ports & Adapters** - Facts, modules, documents and caches come through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
