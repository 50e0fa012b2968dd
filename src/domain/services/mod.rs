//! Domain Services
//!
//! Pure compilation logic over domain entities, leaf-first:
//! fact matching, confinement, deep merge, catalog building, check indexing
//! and parameter resolution.

pub mod catalog_builder;
pub mod check_index;
pub mod compliance_engine;
pub mod confinement;
pub mod deep_merge;
pub mod fact_matcher;
pub mod parameter_resolver;

pub use catalog_builder::CatalogBuilder;
pub use check_index::CheckIndex;
pub use compliance_engine::ComplianceEngine;
pub use confinement::{version_satisfies, Confinement};
pub use deep_merge::{combine, knockout_merge, Mismatch};
pub use fact_matcher::fact_matches;
pub use parameter_resolver::{Assignments, ParameterResolver};
