//! FactStore port

use serde_json::Value;

pub trait FactStore: Send + Sync {
    /// Current value of a fact, `None` when the fact is unknown
    fn fact(&self, name: &str) -> Option<Value>;
}
