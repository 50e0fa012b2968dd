//! ModuleInventory port

use crate::domain::entities::ModuleRecord;

pub trait ModuleInventory: Send + Sync {
    fn modules(&self) -> Vec<ModuleRecord>;

    /// First module answering to `name`
    fn find(&self, name: &str) -> Option<ModuleRecord> {
        self.modules().into_iter().find(|m| m.matches_name(name))
    }
}
