//! Compliance engine
//!
//! One compilation attempt: the merged catalog plus its check index, which
//! is built on first use and then reused for every resolution against this
//! catalog.

use crate::domain::entities::{Catalog, ComplianceDocument};
use crate::error::MarkupResult;

use super::catalog_builder::CatalogBuilder;
use super::check_index::CheckIndex;
use super::confinement::Confinement;
use super::parameter_resolver::{Assignments, ParameterResolver};

#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    catalog: Catalog,
    index: Option<CheckIndex>,
}

impl ComplianceEngine {
    /// Import `documents` in order into a fresh catalog.
    pub fn load<'d>(
        documents: impl IntoIterator<Item = &'d ComplianceDocument>,
        confinement: Confinement<'_>,
    ) -> MarkupResult<Self> {
        let mut builder = CatalogBuilder::new(confinement);
        for document in documents {
            builder.import(document)?;
        }
        tracing::debug!(documents = builder.imported(), "imported compliance documents");
        Ok(Self::from_catalog(builder.finish()))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            index: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The check index, built on first call
    pub fn check_index(&mut self) -> MarkupResult<&CheckIndex> {
        let index = match self.index.take() {
            Some(index) => index,
            None => CheckIndex::build(&self.catalog)?,
        };
        Ok(&*self.index.insert(index))
    }

    /// Resolve the parameter assignments for an ordered list of active profiles
    pub fn list_puppet_params<S: AsRef<str>>(&mut self, profiles: &[S]) -> MarkupResult<Assignments> {
        let index = match self.index.take() {
            Some(index) => index,
            None => CheckIndex::build(&self.catalog)?,
        };
        let result = ParameterResolver::new(&self.catalog, &index).resolve(profiles);
        self.index = Some(index);
        result
    }
}
