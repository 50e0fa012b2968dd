//! Projection mode
//!
//! Selects which part of a resolved assignment is served for a key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// The enforced value only
    #[default]
    Value,
    /// The whole assignment: parameter, value, controls, identifiers, oval-ids
    Metadata,
}

impl ProjectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Value => "value",
            ProjectionMode::Metadata => "metadata",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "value" => Ok(ProjectionMode::Value),
            "metadata" => Ok(ProjectionMode::Metadata),
            other => Err(format!("unknown projection mode '{}'", other)),
        }
    }
}
