//! SHA-256 content hashing for the duplicate guard.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of an in-memory body and return the digest as lowercase hex.
pub fn sha256_hex(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}
