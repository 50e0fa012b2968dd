use std::path::Path;

use anyhow::Result;
use serde_json::Value;

pub fn print_config_warnings(path: &Path, warnings: &[compliance_markup::ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Pretty JSON, or YAML for humans
pub fn render(value: &Value, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(serde_yaml_ng::to_string(value)?)
    }
}

pub fn print_value(value: &Value, json: bool) -> Result<()> {
    print!("{}", render(value, json)?);
    Ok(())
}
