//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;
mod lookup_key;
mod projection;

pub use fingerprint::ProfileFingerprint;
pub use lookup_key::{
    knockout_of, DebugKey, LookupKey, DEBUG_PREFIX, ENFORCEMENT_KEY, INLINE_MAP_KEYS, KNOCKOUT_PREFIX,
    RESERVED_PREFIX,
};
pub use projection::ProjectionMode;
