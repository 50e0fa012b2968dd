//! Catalog entity
//!
//! The four entry collections accumulated across all imported documents.

use serde_json::Value;

use super::Mapping;

/// A top-level document section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profiles,
    Controls,
    Checks,
    Ces,
}

impl Section {
    /// Import order
    pub const ALL: [Section; 4] = [
        Section::Profiles,
        Section::Controls,
        Section::Checks,
        Section::Ces,
    ];

    /// Key of the section in a document
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Profiles => "profiles",
            Section::Controls => "controls",
            Section::Checks => "checks",
            Section::Ces => "ce",
        }
    }

    /// Key under which a profile lists references to entries of this section
    pub fn reference_key(&self) -> &'static str {
        match self {
            Section::Ces => "ces",
            other => other.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    profiles: Mapping,
    controls: Mapping,
    checks: Mapping,
    ces: Mapping,
}

impl Catalog {
    /// Version tag reported by [`Catalog::dump`]
    pub const DUMP_VERSION: &'static str = "2.0.0";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, section: Section) -> &Mapping {
        match section {
            Section::Profiles => &self.profiles,
            Section::Controls => &self.controls,
            Section::Checks => &self.checks,
            Section::Ces => &self.ces,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut Mapping {
        match section {
            Section::Profiles => &mut self.profiles,
            Section::Controls => &mut self.controls,
            Section::Checks => &mut self.checks,
            Section::Ces => &mut self.ces,
        }
    }

    pub fn profiles(&self) -> &Mapping {
        &self.profiles
    }

    pub fn controls(&self) -> &Mapping {
        &self.controls
    }

    pub fn checks(&self) -> &Mapping {
        &self.checks
    }

    pub fn ces(&self) -> &Mapping {
        &self.ces
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }

    /// Structural dump of every catalog, tagged with [`Catalog::DUMP_VERSION`]
    pub fn dump(&self) -> Value {
        let mut out = Mapping::new();
        out.insert("version".into(), Value::String(Self::DUMP_VERSION.into()));
        for section in Section::ALL {
            out.insert(
                section.as_str().into(),
                Value::Object(self.section(section).clone()),
            );
        }
        Value::Object(out)
    }
}
