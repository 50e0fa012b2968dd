//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MarkupError, MarkupResult};
use crate::infrastructure::documents::COMPLIANCE_DATA_DIR_ENV;

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "compliance_markup.toml";

pub const ENFORCEMENT_ENV: &str = "COMPLIANCE_MARKUP_ENFORCEMENT";
pub const MODE_ENV: &str = "COMPLIANCE_MARKUP_MODE";
pub const VERBOSITY_ENV: &str = "COMPLIANCE_MARKUP_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MarkupResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MarkupError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the working directory config, user config, or defaults
pub fn load_or_default(working_dir: Option<&Path>) -> Config {
    let candidates = working_dir
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config"),
        }
    }

    with_env_overrides(Config::default())
}

/// `<user config dir>/compliance-markup/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("compliance-markup").join("config.toml"))
}

/// Apply environment variable overrides (COMPLIANCE_MARKUP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = var(COMPLIANCE_DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        config.data.compliance_data_dir = Some(PathBuf::from(dir));
    }

    // Comma separated, order preserved
    if let Some(profiles) = var(ENFORCEMENT_ENV) {
        let parsed: Vec<String> = profiles
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.enforcement = parsed;
        }
    }

    if let Some(mode) = var(MODE_ENV) {
        match mode.parse() {
            Ok(mode) => config.lookup.mode = mode,
            Err(e) => tracing::warn!(variable = MODE_ENV, error = %e, "ignoring invalid override"),
        }
    }

    if let Some(verbosity) = var(VERBOSITY_ENV) {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "enforcement",
        "data",
        "compliance_data_dir",
        "extra_paths",
        "module_paths",
        "lookup",
        "mode",
        "facts",
        "file",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
