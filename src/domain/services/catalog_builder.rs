//! Catalog builder
//!
//! Folds compliance documents into the four catalogs, in the order they are
//! imported. Each section is confined first, then every surviving entry is
//! deep merged into the catalog with knockout semantics.

use serde_json::Value;

use crate::domain::entities::{Catalog, ComplianceDocument, Section};
use crate::domain::value_objects::KNOCKOUT_PREFIX;
use crate::error::MarkupResult;

use super::confinement::Confinement;
use super::deep_merge::knockout_merge;

pub struct CatalogBuilder<'a> {
    confinement: Confinement<'a>,
    catalog: Catalog,
    imported: usize,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(confinement: Confinement<'a>) -> Self {
        Self {
            confinement,
            catalog: Catalog::new(),
            imported: 0,
        }
    }

    /// Import one document. Returns `false` when the document version is not
    /// supported and it was skipped.
    pub fn import(&mut self, document: &ComplianceDocument) -> MarkupResult<bool> {
        if !document.is_supported() {
            tracing::debug!(
                source = document.source_id(),
                version = ?document.version(),
                "skipping document with unsupported version"
            );
            return Ok(false);
        }

        for section in Section::ALL {
            let Some(entries) = document.section(section) else {
                continue;
            };
            let mut entries = entries.clone();
            self.confinement.apply(&mut entries)?;

            let target = self.catalog.section_mut(section);
            for (name, body) in entries {
                if let Some(knocked_out) = name.strip_prefix(KNOCKOUT_PREFIX) {
                    target.retain(|k, _| k != knocked_out);
                    continue;
                }
                let entry = target
                    .entry(name)
                    .or_insert_with(|| Value::Object(Default::default()));
                knockout_merge(entry, &body);
            }
        }

        self.imported += 1;
        Ok(true)
    }

    /// Number of documents imported so far
    pub fn imported(&self) -> usize {
        self.imported
    }

    pub fn finish(self) -> Catalog {
        self.catalog
    }
}
