//! Enforcement use case
//!
//! The entry point hosts call to resolve a single key against the active
//! compliance profiles.

mod lock;
mod result;
mod use_case;


pub use lock::{CompileLock, LOCK_KEY};
pub use result::LookupResult;
pub use use_case::EnforcementUseCase;
