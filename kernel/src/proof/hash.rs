//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 for all V1 artifacts. Each digest is computed over
//! `domain_prefix || data`, where every prefix is null-terminated so no
//! prefix is a prefix of another.
//!
//! **Exactly one place defines canonical hashing.** Reports and scenario
//! sets route through [`canonical_hash`].

use std::fmt;

use sha2::{Digest, Sha256};

/// A SHA-256 digest produced by [`canonical_hash`].
///
/// Displays as `"sha256:<lowercase_hex>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Algorithm label used in the display form.
    pub const ALGORITHM: &'static str = "sha256";

    /// Lowercase hex of the digest, without the algorithm label.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::ALGORITHM, self.hex_digest())
    }
}

/// Domain prefix for batch run report hashing.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYPOINT::RUN_REPORT::V1\0";

/// Domain prefix for scenario set hashing (the ordered list of start grids).
pub const DOMAIN_SCENARIO_SET: &[u8] = b"WAYPOINT::SCENARIO_SET::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Displays as `"sha256:<lowercase_hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(hasher.finalize().into())
}
