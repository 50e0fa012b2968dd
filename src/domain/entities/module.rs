//! Module record entity

use serde::{Deserialize, Serialize};

/// An installed module as reported by the module inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub name: String,
    pub version: String,
}

impl ModuleRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Whether this record answers to `name`; `author/module` and `author-module` are equivalent
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_module_name(&self.name) == normalize_module_name(name)
    }
}

fn normalize_module_name(name: &str) -> String {
    name.trim().replace('/', "-").to_lowercase()
}
