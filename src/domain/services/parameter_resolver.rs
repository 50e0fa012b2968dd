//! Parameter resolver
//!
//! Walks the active profiles in reverse order, gathers every specification
//! they reach through checks, controls and CEs, and folds them into one
//! assignment per parameter.
//!
//! Precedence follows from the order: the last listed profile is processed
//! first, so for scalar values the first listed profile is written last and
//! wins. Sequences and mappings accumulate from every profile.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::entities::{is_truthy, Catalog, ParameterAssignment, Section, Specification};
use crate::error::{MarkupError, MarkupResult};

use super::check_index::CheckIndex;
use super::deep_merge::{combine, combine_mapping, Mismatch};

/// Reference kinds in the order they are gathered from a profile
const REFERENCE_KINDS: [Section; 3] = [Section::Checks, Section::Controls, Section::Ces];

pub type Assignments = BTreeMap<String, ParameterAssignment>;

pub struct ParameterResolver<'a> {
    catalog: &'a Catalog,
    index: &'a CheckIndex,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(catalog: &'a Catalog, index: &'a CheckIndex) -> Self {
        Self { catalog, index }
    }

    /// The flat, ordered list of specifications reached by `profiles`
    pub fn gather<S: AsRef<str>>(&self, profiles: &[S]) -> Vec<&'a Specification> {
        let mut working: Vec<&'a Specification> = Vec::new();

        for profile in profiles.iter().rev() {
            let profile = profile.as_ref();
            let Some(body) = self.catalog.profiles().get(profile) else {
                tracing::debug!(profile, "active profile not found in catalog");
                continue;
            };

            for kind in REFERENCE_KINDS {
                let Some(refs) = body.get(kind.reference_key()).and_then(Value::as_object) else {
                    continue;
                };
                for (name, enabled) in refs {
                    if !is_truthy(enabled) {
                        continue;
                    }
                    if let Some(specs) = self.index.lookup(kind, name) {
                        working.extend(specs.iter());
                    }
                }
            }
        }

        working
    }

    pub fn resolve<S: AsRef<str>>(&self, profiles: &[S]) -> MarkupResult<Assignments> {
        let working = self.gather(profiles);
        let mut assignments = Assignments::new();
        if working.is_empty() {
            return Ok(assignments);
        }

        let mut contributions: BTreeMap<&str, usize> = BTreeMap::new();
        for spec in working {
            *contributions.entry(spec.parameter.as_str()).or_default() += 1;

            match assignments.get_mut(&spec.parameter) {
                None => {
                    assignments.insert(
                        spec.parameter.clone(),
                        ParameterAssignment::from_specification(spec),
                    );
                }
                Some(existing) => merge_into(existing, spec)?,
            }
        }

        for (parameter, count) in contributions {
            if count > 1 {
                tracing::warn!(parameter, count, "multiple specifications set the same parameter");
            }
        }

        Ok(assignments)
    }
}

fn merge_into(existing: &mut ParameterAssignment, spec: &Specification) -> MarkupResult<()> {
    combine(&mut existing.value, &spec.value).map_err(|m| mismatch(&spec.parameter, "value", m))?;
    // Metadata fields are normalized to mappings on import, so they always combine
    combine_mapping(&mut existing.controls, &spec.controls);
    combine_mapping(&mut existing.identifiers, &spec.identifiers);
    combine_mapping(&mut existing.oval_ids, &spec.oval_ids);
    Ok(())
}

fn mismatch(parameter: &str, field: &str, m: Mismatch) -> MarkupError {
    MarkupError::MergeTypeMismatch {
        parameter: parameter.to_string(),
        field: field.to_string(),
        existing: m.existing,
        incoming: m.incoming,
    }
}

#[cfg(test)]
mod tests;
