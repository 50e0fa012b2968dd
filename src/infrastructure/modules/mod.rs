//! Module inventories

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::ModuleRecord;
use crate::domain::ports::ModuleInventory;

/// A fixed module list
#[derive(Debug, Clone, Default)]
pub struct StaticModuleInventory {
    modules: Vec<ModuleRecord>,
}

impl StaticModuleInventory {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self { modules }
    }

    pub fn with(mut self, name: &str, version: &str) -> Self {
        self.modules.push(ModuleRecord::new(name, version));
        self
    }
}

impl ModuleInventory for StaticModuleInventory {
    fn modules(&self) -> Vec<ModuleRecord> {
        self.modules.clone()
    }
}

#[derive(Debug, Deserialize)]
struct ModuleMetadata {
    name: String,
    version: String,
}

/// Modules discovered from `<module_path>/<module>/metadata.json`
///
/// The scan happens once at construction; unreadable metadata is skipped.
#[derive(Debug, Clone, Default)]
pub struct FsModuleInventory {
    modules: Vec<ModuleRecord>,
}

impl FsModuleInventory {
    pub fn scan(module_paths: &[PathBuf]) -> Self {
        let mut modules = Vec::new();
        for path in module_paths {
            scan_module_path(path, &mut modules);
        }
        tracing::debug!(count = modules.len(), "discovered installed modules");
        Self { modules }
    }
}

impl ModuleInventory for FsModuleInventory {
    fn modules(&self) -> Vec<ModuleRecord> {
        self.modules.clone()
    }
}

fn scan_module_path(path: &Path, modules: &mut Vec<ModuleRecord>) {
    let Ok(entries) = std::fs::read_dir(path) else {
        return;
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let metadata_path = dir.join("metadata.json");
        let Ok(content) = std::fs::read_to_string(&metadata_path) else {
            continue;
        };
        match serde_json::from_str::<ModuleMetadata>(&content) {
            Ok(meta) => modules.push(ModuleRecord::new(meta.name, meta.version)),
            Err(e) => {
                tracing::warn!(path = %metadata_path.display(), error = %e, "invalid module metadata");
            }
        }
    }
}
