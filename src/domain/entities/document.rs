//! Compliance document entity
//!
//! A single parsed source document. Only the top-level `version` and the four
//! section mappings are interpreted; everything else is carried as-is.

use serde_json::Value;

use super::{Mapping, Section};

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceDocument {
    source_id: String,
    body: Value,
}

impl ComplianceDocument {
    /// Major document version this compiler understands
    pub const SUPPORTED_MAJOR: &'static str = "2";

    pub fn new(source_id: impl Into<String>, body: Value) -> Self {
        Self {
            source_id: source_id.into(),
            body,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The declared version, as text (`2`, `2.0.0` and `"2.0"` are all accepted)
    pub fn version(&self) -> Option<String> {
        match self.body.get("version")? {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The text before the first `.` of the version
    pub fn major_version(&self) -> Option<String> {
        self.version()
            .map(|v| v.split('.').next().unwrap_or_default().to_string())
    }

    pub fn is_supported(&self) -> bool {
        self.major_version().as_deref() == Some(Self::SUPPORTED_MAJOR)
    }

    /// Entries of one section, if the document declares it as a mapping
    pub fn section(&self, section: Section) -> Option<&Mapping> {
        self.body.get(section.as_str())?.as_object()
    }
}
