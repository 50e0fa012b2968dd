//! LookupCache port
//!
//! Session-scoped memoization store. One instance per evaluation session;
//! it holds the reentrancy flag, per-parameter values and compiled maps.

use serde_json::Value;

pub trait LookupCache: Send + Sync {
    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value);
}
