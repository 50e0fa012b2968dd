//! Fact stores

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::Mapping;
use crate::domain::ports::FactStore;
use crate::error::{MarkupError, MarkupResult};

/// Facts held in memory, typically loaded from a YAML or JSON facts file
#[derive(Debug, Clone, Default)]
pub struct StaticFactStore {
    facts: Mapping,
}

impl StaticFactStore {
    pub fn new(facts: Mapping) -> Self {
        Self { facts }
    }

    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.facts.insert(name.into(), value);
        self
    }

    /// Load facts from a YAML or JSON file whose top level is a mapping
    pub fn from_file(path: &Path) -> MarkupResult<Self> {
        let content = std::fs::read_to_string(path)?;
        // YAML is a superset of JSON, one parser covers both
        let value: Value = serde_yaml_ng::from_str(&content)?;
        match value {
            Value::Object(facts) => Ok(Self::new(facts)),
            Value::Null => Ok(Self::default()),
            _ => Err(MarkupError::InvalidConfig {
                file: path.to_path_buf(),
                message: "facts file must contain a mapping".to_string(),
            }),
        }
    }
}

impl FactStore for StaticFactStore {
    fn fact(&self, name: &str) -> Option<Value> {
        self.facts.get(name).filter(|v| !v.is_null()).cloned()
    }
}
