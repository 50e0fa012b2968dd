//! Compliance Markup - compliance-profile enforcement backend
//!
//! Compliance documents declare profiles, controls, checks and CEs (compliance
//! elements). Checks carry parameter settings. Given the ordered list of profiles
//! a host enforces, this crate merges every document into one catalog, confines
//! entries to the host's facts and installed modules, and answers single-key
//! lookups with the resolved parameter value.
//!
//! ## Layers
//!
//! - `domain` - Catalog model, merge rules, confinement and resolution
//! - `application` - The enforcement lookup use case
//! - `infrastructure` - Document sources, fact stores, caches and host adapters
//! - `config` - TOML configuration for the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{EnforcementUseCase, LookupResult};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Catalog, ComplianceDocument, ParameterAssignment};
pub use domain::services::ComplianceEngine;
pub use domain::value_objects::ProjectionMode;
pub use error::{MarkupError, MarkupResult};
