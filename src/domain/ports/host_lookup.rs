//! HostLookup port
//!
//! The host's key/value resolution. The enforcement backend uses it to read
//! the active profile list and inline compliance maps; an implementation may
//! route lookups straight back into the backend.

use serde_json::Value;

pub trait HostLookup {
    fn lookup(&self, key: &str, default: Value) -> Value;
}

impl<F> HostLookup for F
where
    F: Fn(&str, Value) -> Value,
{
    fn lookup(&self, key: &str, default: Value) -> Value {
        self(key, default)
    }
}
