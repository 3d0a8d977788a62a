//! Content hashing for sentence deduplication.

use sha2::{Digest, Sha256};

/// Deterministic dedup key for a sentence.
///
/// SHA-256 of the lower-cased text, hex encoded (64 chars). Two texts that
/// differ only in case produce the same key. Not used for any security
/// property.
#[must_use]
pub fn generate_hash_key(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.to_lowercase().as_bytes());
    format!("{:x}", hasher.finalize())
}
