//! Profile Fingerprint Value Object
//!
//! A stable identity for an ordered list of active profiles.
//! Used as the cache key for compiled parameter maps.

use std::fmt;

/// Profile set fingerprint
///
/// Wraps a SHA-256 hex digest of the ordered profile names. Order matters:
/// `[a, b]` and `[b, a]` resolve with different precedence and therefore
/// fingerprint differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileFingerprint(String);

impl ProfileFingerprint {
    /// Prefix used when the fingerprint is turned into a cache key
    pub const CACHE_PREFIX: &'static str = "compliance_map_";

    /// Compute the fingerprint of an ordered profile list
    pub fn from_profiles<S: AsRef<str>>(profiles: &[S]) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for profile in profiles {
            let name = profile.as_ref();
            // Length-prefix each name so ["ab", "c"] and ["a", "bc"] differ
            hasher.update((name.len() as u64).to_be_bytes());
            hasher.update(name.as_bytes());
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key for the compiled map of this profile set
    pub fn cache_key(&self) -> String {
        format!("{}{}", Self::CACHE_PREFIX, self.0)
    }
}

impl fmt::Display for ProfileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProfileFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
