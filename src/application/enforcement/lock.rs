//! Reentrancy lock
//!
//! A boolean flag in the session cache. While it is set, any lookup that
//! reaches the use case comes from inside a compilation and is not served.

use serde_json::Value;

use crate::domain::ports::LookupCache;

/// Cache key of the reentrancy flag
pub const LOCK_KEY: &str = "compliance_markup::lock";

/// Holds the lock until dropped
pub struct CompileLock<'a> {
    cache: &'a dyn LookupCache,
}

impl<'a> CompileLock<'a> {
    pub fn is_held(cache: &dyn LookupCache) -> bool {
        matches!(cache.get(LOCK_KEY), Some(Value::Bool(true)))
    }

    /// Take the lock, or `None` if it is already held
    pub fn acquire(cache: &'a dyn LookupCache) -> Option<Self> {
        if Self::is_held(cache) {
            return None;
        }
        cache.set(LOCK_KEY, Value::Bool(true));
        Some(Self { cache })
    }
}

impl Drop for CompileLock<'_> {
    fn drop(&mut self) {
        self.cache.set(LOCK_KEY, Value::Bool(false));
    }
}
