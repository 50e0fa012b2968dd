//! Enforcement Use Case
//!
//! Orchestrates one lookup:
//! 1. Reject keys in the backend's own namespace
//! 2. Refuse nested lookups while a compilation is running
//! 3. Serve from the compiled map of the active profile set when cached
//! 4. Otherwise import documents, resolve parameters and cache the result
//!
//! Nothing below this use case is trusted not to fail. Every failure is
//! reported to the debug sink and turned into `NotFound`.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};

use crate::domain::entities::{ComplianceDocument, Mapping};
use crate::domain::ports::{
    DebugSink, DocumentSource, FactStore, HostLookup, LookupCache, ModuleInventory, NoopDebugSink,
};
use crate::domain::services::{ComplianceEngine, Confinement};
use crate::domain::value_objects::{
    knockout_of, DebugKey, LookupKey, ProfileFingerprint, ProjectionMode, ENFORCEMENT_KEY,
    INLINE_MAP_KEYS,
};
use crate::error::MarkupResult;

use super::lock::CompileLock;
use super::result::LookupResult;

pub struct EnforcementUseCase {
    documents: Arc<dyn DocumentSource>,
    facts: Arc<dyn FactStore>,
    modules: Arc<dyn ModuleInventory>,
    cache: Arc<dyn LookupCache>,
    sink: Arc<dyn DebugSink>,
    mode: ProjectionMode,
}

impl EnforcementUseCase {
    pub fn new(
        documents: Arc<dyn DocumentSource>,
        facts: Arc<dyn FactStore>,
        modules: Arc<dyn ModuleInventory>,
        cache: Arc<dyn LookupCache>,
    ) -> Self {
        Self {
            documents,
            facts,
            modules,
            cache,
            sink: Arc::new(NoopDebugSink),
            mode: ProjectionMode::default(),
        }
    }

    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Resolve `key` for the profiles the host currently enforces.
    pub fn resolve_value(&self, key: &str, host: &dyn HostLookup) -> LookupResult {
        let classified = LookupKey::classify(key);
        if classified.is_reserved() {
            return LookupResult::NotFound;
        }

        let Some(_lock) = CompileLock::acquire(self.cache.as_ref()) else {
            self.sink
                .debug(&format!("compliance_markup: nested lookup of '{}' ignored", key));
            return LookupResult::NotFound;
        };

        match self.resolve_locked(&classified, host) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(key, error = %e, "compliance compilation failed");
                self.sink
                    .debug(&format!("compliance_markup: compilation failed: {}", e));
                LookupResult::NotFound
            }
        }
    }

    fn resolve_locked(&self, key: &LookupKey<'_>, host: &dyn HostLookup) -> MarkupResult<LookupResult> {
        let profiles = active_profiles(&host.lookup(ENFORCEMENT_KEY, json!([])));
        if profiles.is_empty() {
            return Ok(LookupResult::NotFound);
        }

        let cache_key = self.compiled_map_key(&ProfileFingerprint::from_profiles(profiles.as_slice()));
        let needs_catalog = matches!(key, LookupKey::Debug(debug) if debug.needs_catalog());
        if !needs_catalog {
            if let Some(Value::Object(compiled)) = self.cache.get(&cache_key) {
                return Ok(serve(&compiled, key));
            }
        }

        let started = Instant::now();
        let mut engine = self.load_engine(host)?;

        match key {
            LookupKey::Debug(DebugKey::Profiles) => {
                return Ok(LookupResult::Found(json!(engine.catalog().profile_names())));
            }
            LookupKey::Debug(DebugKey::Dump) => {
                return Ok(LookupResult::Found(engine.catalog().dump()));
            }
            _ => {}
        }

        let assignments = engine.list_puppet_params(profiles.as_slice())?;
        let mut compiled = Mapping::new();
        for (parameter, assignment) in assignments {
            let projected = match self.mode {
                ProjectionMode::Value => assignment.value,
                ProjectionMode::Metadata => assignment.to_value(),
            };
            if matches!(LookupKey::classify(&parameter), LookupKey::Parameter(_)) {
                self.cache.set(&parameter, projected.clone());
            }
            compiled.insert(parameter, projected);
        }

        let elapsed = started.elapsed().as_secs_f64();
        compiled.insert(DebugKey::CompileTime.as_str().to_string(), json!(elapsed));
        self.sink.debug(&format!(
            "compliance_markup: compiled {} parameters for {:?} in {:.4}s",
            compiled.len() - 1,
            profiles,
            elapsed
        ));
        self.cache.set(&cache_key, Value::Object(compiled.clone()));

        Ok(serve(&compiled, key))
    }

    fn load_engine(&self, host: &dyn HostLookup) -> MarkupResult<ComplianceEngine> {
        let mut documents = self.documents.documents()?;

        for key in INLINE_MAP_KEYS {
            let inline = host.lookup(key, json!({}));
            if inline.as_object().is_some_and(|m| !m.is_empty()) {
                documents.push(ComplianceDocument::new(format!("inline:{}", key), inline));
            }
        }

        let confinement = Confinement::new(self.facts.as_ref(), self.modules.as_ref());
        ComplianceEngine::load(&documents, confinement)
    }

    fn compiled_map_key(&self, fingerprint: &ProfileFingerprint) -> String {
        match self.mode {
            ProjectionMode::Value => fingerprint.cache_key(),
            ProjectionMode::Metadata => format!("{}_{}", fingerprint.cache_key(), self.mode),
        }
    }
}

/// Profile names from the enforcement setting; a bare string is a one-element list
fn active_profiles(value: &Value) -> Vec<String> {
    match value {
        Value::String(name) => vec![name.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Answer a key from a compiled map, honoring knockout entries
fn serve(compiled: &Mapping, key: &LookupKey<'_>) -> LookupResult {
    match key {
        LookupKey::Parameter(name) => {
            if compiled.contains_key(&knockout_of(name)) {
                return LookupResult::NotFound;
            }
            compiled.get(*name).cloned().into()
        }
        LookupKey::Debug(DebugKey::ComplianceData) => {
            LookupResult::Found(Value::Object(compiled.clone()))
        }
        LookupKey::Debug(DebugKey::CompileTime) => {
            compiled.get(DebugKey::CompileTime.as_str()).cloned().into()
        }
        LookupKey::Debug(_) | LookupKey::Reserved => LookupResult::NotFound,
    }
}
