//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMPLIANCE_MARKUP_*)
//! 3. `compliance_markup.toml` in the working directory, or `--config PATH`
//! 4. User config (`<config dir>/compliance-markup/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, user_config_path, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, DataConfig, FactsConfig, LookupConfig, OutputConfig, Verbosity};
