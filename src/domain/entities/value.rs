//! Helpers over the parsed document value model.

use serde_json::Value;

/// A keyed collection of document values, in insertion order
pub type Mapping = serde_json::Map<String, Value>;

/// Everything except `null` and `false` counts as enabled.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Human-readable tag for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
