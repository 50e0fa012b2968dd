//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectionMode;
use crate::error::MarkupResult;

use super::loader::{self, ConfigWarning};

/// Where compliance documents are searched
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Directory of site-local compliance documents
    #[serde(default)]
    pub compliance_data_dir: Option<PathBuf>,

    /// Additional files or directories, loaded last
    #[serde(default)]
    pub extra_paths: Vec<PathBuf>,

    /// Directories holding installed modules (`<path>/<module>/metadata.json`)
    #[serde(default)]
    pub module_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LookupConfig {
    #[serde(default)]
    pub mode: ProjectionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FactsConfig {
    /// YAML or JSON file of node facts
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }

    /// One step louder per `-v`, saturating at `Debug`
    pub fn raised(self, steps: u8) -> Self {
        (0..steps).fold(self, |level, _| match level {
            Verbosity::Quiet => Verbosity::Normal,
            Verbosity::Normal => Verbosity::Verbose,
            Verbosity::Verbose | Verbosity::Debug => Verbosity::Debug,
        })
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Active profile list, in precedence order
    #[serde(default)]
    pub enforcement: Vec<String>,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub facts: FactsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MarkupResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MarkupResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory config, user config, or defaults
    pub fn load_or_default(working_dir: Option<&Path>) -> Self {
        loader::load_or_default(working_dir)
    }

    /// Apply environment variable overrides (COMPLIANCE_MARKUP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
