//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 over `domain || data`, rendered as
//! `"sha256:<hex_digest>"`. Every prefix is null-terminated so no two
//! domains can collide on a shared prefix.
//!
//! **Exactly one place defines canonical hashing.** State fingerprints and
//! plan digests both route through [`canonical_hash`].

use std::fmt;

use sha2::{Digest, Sha256};

/// A content-addressed hash, rendered as `"sha256:<hex_digest>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for [`State`](crate::model::State) fingerprints.
pub const DOMAIN_STATE: &[u8] = b"STRIDER::STATE::V1\0";

/// Domain prefix for plan digests (ordered action indices).
pub const DOMAIN_PLAN: &[u8] = b"STRIDER::PLAN::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash(format!("sha256:{}", hex::encode(digest)))
}
