//! Content hashing for string identities.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 content hash of a string.
///
/// Hashes the UTF-8 bytes of `value` and returns the lowercase hex digest.
/// The result doubles as the record identity, so equal strings always
/// collapse onto the same key.
#[must_use]
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
