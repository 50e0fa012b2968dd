//! Deep merge primitives
//!
//! Two flavors:
//! - [`knockout_merge`] folds documents into catalogs. Mappings recurse, other
//!   values are overwritten, and an incoming `--key` deletes `key`.
//! - [`combine`] folds specifications into a parameter assignment. Sequences
//!   union, mappings deep merge, scalars are replaced, and mixing a container
//!   with anything else is a mismatch.

use serde_json::Value;

use crate::domain::entities::{kind_name, Mapping};
use crate::domain::value_objects::KNOCKOUT_PREFIX;

/// Merge `incoming` into `dest` honoring knockout keys.
pub fn knockout_merge(dest: &mut Value, incoming: &Value) {
    match (dest, incoming) {
        (Value::Object(dest), Value::Object(incoming)) => knockout_merge_mapping(dest, incoming),
        (dest, incoming) => *dest = strip_knockouts(incoming),
    }
}

/// Key-by-key form of [`knockout_merge`]
pub fn knockout_merge_mapping(dest: &mut Mapping, incoming: &Mapping) {
    for (key, value) in incoming {
        if let Some(target) = key.strip_prefix(KNOCKOUT_PREFIX) {
            if dest.contains_key(target) {
                dest.retain(|k, _| k != target);
            }
            continue;
        }
        match dest.get_mut(key) {
            Some(existing) => knockout_merge(existing, value),
            None => {
                dest.insert(key.clone(), strip_knockouts(value));
            }
        }
    }
}

/// Copy of `value` with every knockout key removed at every depth
fn strip_knockouts(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| !k.starts_with(KNOCKOUT_PREFIX))
                .map(|(k, v)| (k.clone(), strip_knockouts(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Shapes of two values that cannot be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub existing: &'static str,
    pub incoming: &'static str,
}

/// Combine `incoming` into `existing` with the type-directed rules.
pub fn combine(existing: &mut Value, incoming: &Value) -> Result<(), Mismatch> {
    match (existing, incoming) {
        (Value::Array(existing), Value::Array(incoming)) => {
            for item in incoming {
                if !existing.contains(item) {
                    existing.push(item.clone());
                }
            }
            // Existing side may itself carry duplicates from its source
            dedupe(existing);
            Ok(())
        }
        (Value::Object(existing), Value::Object(incoming)) => {
            overlay_mapping(existing, incoming);
            Ok(())
        }
        (existing, incoming) if is_container(existing) || is_container(incoming) => Err(Mismatch {
            existing: kind_name(existing),
            incoming: kind_name(incoming),
        }),
        (existing, incoming) => {
            *existing = incoming.clone();
            Ok(())
        }
    }
}

/// Mapping flavor of [`combine`], used for controls and identifiers
pub fn combine_mapping(existing: &mut Mapping, incoming: &Mapping) {
    overlay_mapping(existing, incoming);
}

fn overlay_mapping(dest: &mut Mapping, incoming: &Mapping) {
    for (key, value) in incoming {
        match (dest.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                overlay_mapping(existing, incoming)
            }
            _ => {
                dest.insert(key.clone(), value.clone());
            }
        }
    }
}

fn dedupe(items: &mut Vec<Value>) {
    let mut seen: Vec<Value> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
mod tests;
