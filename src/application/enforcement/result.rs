//! Lookup result

use serde_json::Value;

/// Outcome of resolving one key
///
/// `NotFound` is not an error: it tells the host to keep looking elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(Value),
    NotFound,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            LookupResult::Found(value) => Some(value),
            LookupResult::NotFound => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            LookupResult::Found(value) => Some(value),
            LookupResult::NotFound => None,
        }
    }
}

impl From<Option<Value>> for LookupResult {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => LookupResult::Found(value),
            None => LookupResult::NotFound,
        }
    }
}
