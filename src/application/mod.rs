//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EnforcementUseCase` - Resolves one lookup key against the active compliance profiles

pub mod enforcement;

pub use enforcement::{CompileLock, EnforcementUseCase, LookupResult, LOCK_KEY};
