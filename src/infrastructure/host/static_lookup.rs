//! Static host lookup
//!
//! A fixed key/value table standing in for the host's data lookup. The CLI
//! uses it to provide the enforcement list and any inline compliance map.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::ports::HostLookup;
use crate::domain::value_objects::ENFORCEMENT_KEY;

#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    values: HashMap<String, Value>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Shorthand for setting the active profile list
    pub fn with_profiles<S: AsRef<str>>(self, profiles: &[S]) -> Self {
        let list = profiles
            .iter()
            .map(|p| Value::String(p.as_ref().to_string()))
            .collect();
        self.with(ENFORCEMENT_KEY, Value::Array(list))
    }
}

impl HostLookup for StaticLookup {
    fn lookup(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }
}
