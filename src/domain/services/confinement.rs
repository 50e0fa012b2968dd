//! Confinement evaluator
//!
//! Drops catalog entries whose `confine` does not hold on this host.
//! Entries without `confine` are always kept. A fact the host does not know
//! never rejects an entry on its own.

use std::collections::HashSet;

use semver::{Version, VersionReq};
use serde_json::Value;

use crate::domain::entities::{Mapping, ModuleRecord};
use crate::domain::ports::{FactStore, ModuleInventory};
use crate::error::{MarkupError, MarkupResult};

use super::fact_matcher::fact_matches;

const MODULE_NAME: &str = "module_name";
const MODULE_VERSION: &str = "module_version";

pub struct Confinement<'a> {
    facts: &'a dyn FactStore,
    modules: Vec<ModuleRecord>,
}

impl<'a> Confinement<'a> {
    pub fn new(facts: &'a dyn FactStore, modules: &dyn ModuleInventory) -> Self {
        Self {
            facts,
            modules: modules.modules(),
        }
    }

    /// Remove every entry whose confinement fails, keeping the order of the rest.
    pub fn apply(&self, entries: &mut Mapping) -> MarkupResult<()> {
        let mut rejected: HashSet<String> = HashSet::new();
        for (name, body) in entries.iter() {
            if !self.admits(name, body)? {
                tracing::debug!(entry = %name, "confinement rejected entry");
                rejected.insert(name.clone());
            }
        }
        if !rejected.is_empty() {
            entries.retain(|name, _| !rejected.contains(name));
        }
        Ok(())
    }

    /// Whether a single entry applies to this host
    pub fn admits(&self, name: &str, body: &Value) -> MarkupResult<bool> {
        let Some(confine) = body.get("confine") else {
            return Ok(true);
        };

        let Some(confine) = confine.as_object() else {
            if has_settings_value(body) {
                tracing::warn!(entry = name, "ignoring non-mapping confine");
                return Ok(true);
            }
            return Err(MarkupError::InvalidConfine {
                entry: name.to_string(),
            });
        };

        for (key, expected) in confine {
            let admitted = match key.as_str() {
                MODULE_NAME => self.module_admits(name, expected, confine.get(MODULE_VERSION)),
                MODULE_VERSION => true,
                fact_name => match self.lookup_fact(fact_name) {
                    Some(fact) => fact_matches(&fact, expected),
                    None => true,
                },
            };
            if !admitted {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn module_admits(&self, entry: &str, name: &Value, version: Option<&Value>) -> bool {
        let Some(name) = name.as_str() else {
            return false;
        };
        let Some(module) = self.modules.iter().find(|m| m.matches_name(name)) else {
            return false;
        };
        let Some(required) = version else {
            return true;
        };

        match version_satisfies(&module.version, required) {
            Ok(ok) => ok,
            Err(message) => {
                tracing::warn!(entry, module = %module.name, "{}", message);
                false
            }
        }
    }

    /// Facts may be addressed with dotted paths into structured facts (`os.release.major`)
    fn lookup_fact(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.facts.fact(name) {
            return Some(value);
        }
        let mut parts = name.split('.');
        let root = self.facts.fact(parts.next()?)?;
        let mut current = &root;
        let mut matched_any = false;
        for part in parts {
            current = current.get(part)?;
            matched_any = true;
        }
        matched_any.then(|| current.clone()).filter(|v| !v.is_null())
    }
}

fn has_settings_value(body: &Value) -> bool {
    body.get("settings")
        .and_then(Value::as_object)
        .is_some_and(|s| s.contains_key("value"))
}

/// Check a module version against a requirement such as `>= 1.0.0 < 2.0.0` or `~> 6.1`.
pub fn version_satisfies(found: &str, required: &Value) -> Result<bool, String> {
    let required = match required {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(format!("unsupported module_version requirement: {}", other)),
    };
    let version = Version::parse(found.trim())
        .map_err(|e| format!("invalid module version '{}': {}", found, e))?;
    let req = VersionReq::parse(&normalize_requirement(&required))
        .map_err(|e| format!("invalid module_version '{}': {}", required, e))?;
    Ok(req.matches(&version))
}

/// Turn whitespace separated comparators into the comma separated form `semver` parses.
fn normalize_requirement(req: &str) -> String {
    if req.contains(',') {
        return req.trim().replace("~>", "~");
    }
    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op: Option<&str> = None;
    for token in req.split_whitespace() {
        let starts_with_digit = token.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit {
            let op = pending_op.take().unwrap_or("=");
            comparators.push(format!("{}{}", op, token));
        } else if token.chars().all(|c| "<>=~^!".contains(c)) {
            pending_op = Some(token);
        } else {
            comparators.push(token.to_string());
        }
    }
    comparators.join(", ").replace("~>", "~")
}
