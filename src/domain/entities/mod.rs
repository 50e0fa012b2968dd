//! Domain Entities
//!
//! - `ComplianceDocument` - One parsed source document
//! - `Catalog` - Profiles, controls, checks and CEs merged across documents
//! - `Specification` - A recognized parameter check
//! - `ParameterAssignment` - A resolved parameter with its justification
//! - `ModuleRecord` - An installed module, for module confinement

mod catalog;
mod document;
mod module;
mod specification;
mod value;

pub use catalog::{Catalog, Section};
pub use document::ComplianceDocument;
pub use module::ModuleRecord;
pub use specification::{ParameterAssignment, Specification, SpecificationKind};
pub use value::{is_truthy, kind_name, Mapping};
