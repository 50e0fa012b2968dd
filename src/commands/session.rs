//! Wiring of config and flags into the enforcement backend

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use compliance_markup::domain::ports::DocumentSource;
use compliance_markup::domain::services::{ComplianceEngine, Confinement};
use compliance_markup::infrastructure::{
    FsDocumentSource, FsModuleInventory, MemoryCache, StaticFactStore, StaticLookup,
    TracingDebugSink,
};
use compliance_markup::{Config, EnforcementUseCase, ProjectionMode};

use crate::cli::SourceArgs;

/// Everything one command invocation needs
pub struct Session {
    pub profiles: Vec<String>,
    pub mode: ProjectionMode,
    documents: Arc<FsDocumentSource>,
    facts: Arc<StaticFactStore>,
    modules: Arc<FsModuleInventory>,
}

impl Session {
    /// Flags win over config, which already carries env overrides
    pub fn build(config: &Config, args: &SourceArgs) -> Result<Self> {
        let profiles = if args.profiles.is_empty() {
            config.enforcement.clone()
        } else {
            args.profiles.clone()
        };

        let module_paths = if args.module_paths.is_empty() {
            config.data.module_paths.clone()
        } else {
            args.module_paths.clone()
        };

        let mut extra_paths: Vec<PathBuf> = config.data.extra_paths.clone();
        extra_paths.extend(args.extra_paths.iter().cloned());

        let documents = FsDocumentSource::new()
            .with_module_paths(module_paths.clone())
            .with_compliance_data_dir(
                args.data_dir
                    .clone()
                    .or_else(|| config.data.compliance_data_dir.clone()),
            )
            .with_extra_paths(extra_paths);

        let facts = match args.facts.as_ref().or(config.facts.file.as_ref()) {
            Some(path) => StaticFactStore::from_file(path)
                .with_context(|| format!("failed to load facts from {}", path.display()))?,
            None => StaticFactStore::default(),
        };

        Ok(Self {
            profiles,
            mode: args.mode.unwrap_or(config.lookup.mode),
            documents: Arc::new(documents),
            facts: Arc::new(facts),
            modules: Arc::new(FsModuleInventory::scan(&module_paths)),
        })
    }

    /// A backend bound to a fresh session cache
    pub fn use_case(&self) -> EnforcementUseCase {
        EnforcementUseCase::new(
            self.documents.clone(),
            self.facts.clone(),
            self.modules.clone(),
            Arc::new(MemoryCache::new()),
        )
        .with_debug_sink(Arc::new(TracingDebugSink))
        .with_mode(self.mode)
    }

    /// The host side of a lookup: the active profile list
    pub fn host(&self) -> StaticLookup {
        StaticLookup::new().with_profiles(self.profiles.as_slice())
    }

    /// Load the merged catalog directly, surfacing errors instead of hiding them
    pub fn engine(&self) -> Result<ComplianceEngine> {
        let documents = self
            .documents
            .documents()
            .context("failed to read compliance documents")?;
        let confinement = Confinement::new(self.facts.as_ref(), self.modules.as_ref());
        Ok(ComplianceEngine::load(&documents, confinement)?)
    }
}
