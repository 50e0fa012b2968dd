//! Lookup key classification
//!
//! Decides what a requested key means to the enforcement backend before any
//! compilation happens. Keys inside the backend's own namespace would re-enter
//! the backend while it is compiling, so they are never served.

/// Namespace owned by the backend
pub const RESERVED_PREFIX: &str = "compliance_markup::";

/// Sub-namespace of [`RESERVED_PREFIX`] that stays servable
pub const DEBUG_PREFIX: &str = "compliance_markup::debug::";

/// Key holding the active profile list
pub const ENFORCEMENT_KEY: &str = "compliance_markup::enforcement";

/// Host keys that may carry inline compliance documents
pub const INLINE_MAP_KEYS: [&str; 2] = ["compliance_markup::compliance_map", "compliance_map"];

/// Prefix marking a key for deletion during merges and final lookup
pub const KNOCKOUT_PREFIX: &str = "--";

const BOOTSTRAP_KEYS: [&str; 4] = [
    ENFORCEMENT_KEY,
    "compliance_markup::compliance_map",
    "compliance_markup::compliance_map::percent_sign",
    "compliance_markup::enforcement_tolerance_level",
];

/// Introspection keys answered with structural data instead of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugKey {
    /// Names of every profile in the compiled catalog
    Profiles,
    /// Full catalogs with a version tag
    Dump,
    /// The compiled parameter map for the active profiles
    ComplianceData,
    /// Compile duration of the active profile set
    CompileTime,
}

impl DebugKey {
    pub const ALL: [DebugKey; 4] = [
        DebugKey::Profiles,
        DebugKey::Dump,
        DebugKey::ComplianceData,
        DebugKey::CompileTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebugKey::Profiles => "compliance_markup::debug::profiles",
            DebugKey::Dump => "compliance_markup::debug::dump",
            DebugKey::ComplianceData => "compliance_markup::debug::compliance_data",
            DebugKey::CompileTime => "compliance_markup::debug::hiera_backend_compile_time",
        }
    }

    fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Whether answering this key needs the full catalogs rather than the compiled map
    pub fn needs_catalog(&self) -> bool {
        matches!(self, DebugKey::Profiles | DebugKey::Dump)
    }
}

/// A classified lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey<'a> {
    /// Owned by the backend; always not-found
    Reserved,
    /// Debug introspection
    Debug(DebugKey),
    /// An ordinary parameter name
    Parameter(&'a str),
}

impl<'a> LookupKey<'a> {
    pub fn classify(key: &'a str) -> Self {
        if BOOTSTRAP_KEYS.contains(&key) || key.starts_with("lookup_options") {
            return LookupKey::Reserved;
        }
        if let Some(debug) = DebugKey::parse(key) {
            return LookupKey::Debug(debug);
        }
        if key.starts_with(RESERVED_PREFIX) && !key.starts_with(DEBUG_PREFIX) {
            return LookupKey::Reserved;
        }
        LookupKey::Parameter(key)
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, LookupKey::Reserved)
    }
}

/// The knockout form of a key (`--key`)
pub fn knockout_of(key: &str) -> String {
    format!("{}{}", KNOCKOUT_PREFIX, key)
}
