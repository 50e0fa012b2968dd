//! Fact matcher
//!
//! Compares a fact value against a confinement value:
//! - `"!x"` matches any fact other than `"x"`
//! - any other string matches by equality
//! - a sequence matches when any element does; nested sequences compare by
//!   equality, other elements go through these same rules
//! - everything else matches by equality

use serde_json::Value;

pub fn fact_matches(fact: &Value, confinement: &Value) -> bool {
    match confinement {
        Value::String(expected) => match expected.strip_prefix('!') {
            Some(negated) => !matches!(fact, Value::String(s) if s == negated),
            None => matches!(fact, Value::String(s) if s == expected),
        },
        Value::Array(options) => options.iter().any(|option| match option {
            Value::Array(_) => fact == option,
            _ => fact_matches(fact, option),
        }),
        other => fact == other,
    }
}
