//! Check index
//!
//! Reverse indices from checks, controls and CEs to the parameter
//! specifications they reach. A check reached through a CE also inherits the
//! CE's control associations.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::{is_truthy, Catalog, Section, Specification};
use crate::error::MarkupResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckIndex {
    checks: HashMap<String, Vec<Specification>>,
    controls: HashMap<String, Vec<Specification>>,
    ces: HashMap<String, Vec<Specification>>,
}

impl CheckIndex {
    pub fn build(catalog: &Catalog) -> MarkupResult<Self> {
        let mut index = Self::default();

        for (name, body) in catalog.checks() {
            let Some(spec) = Specification::from_check(name, body)? else {
                continue;
            };

            for (control, enabled) in &spec.controls {
                if is_truthy(enabled) {
                    push(&mut index.controls, control, &spec);
                }
            }

            for ce in &spec.ces {
                let Some(ce_body) = catalog.ces().get(ce) else {
                    continue;
                };
                push(&mut index.ces, ce, &spec);

                if let Some(ce_controls) = ce_body.get("controls").and_then(Value::as_object) {
                    for (control, enabled) in ce_controls {
                        if is_truthy(enabled) {
                            push(&mut index.controls, control, &spec);
                        }
                    }
                }
            }

            index.checks.insert(name.clone(), vec![spec]);
        }

        tracing::debug!(
            checks = index.checks.len(),
            controls = index.controls.len(),
            ces = index.ces.len(),
            "built check index"
        );
        Ok(index)
    }

    /// Specifications reachable from `name` through one kind of reference
    pub fn lookup(&self, kind: Section, name: &str) -> Option<&[Specification]> {
        let map = match kind {
            Section::Checks => &self.checks,
            Section::Controls => &self.controls,
            Section::Ces => &self.ces,
            Section::Profiles => return None,
        };
        map.get(name).map(Vec::as_slice)
    }

    pub fn checks(&self) -> &HashMap<String, Vec<Specification>> {
        &self.checks
    }

    pub fn controls(&self) -> &HashMap<String, Vec<Specification>> {
        &self.controls
    }

    pub fn ces(&self) -> &HashMap<String, Vec<Specification>> {
        &self.ces
    }
}

fn push(map: &mut HashMap<String, Vec<Specification>>, key: &str, spec: &Specification) {
    map.entry(key.to_string()).or_default().push(spec.clone());
}
