//!
//! SHA-256 fingerprints for unit payloads, used by registry logging and
//! upgrade-style comparisons.
//!

use sha2::{Digest, Sha256};

/// Return the SHA-256 digest of the provided unit bytes.
#[must_use]
pub fn unit_hash(bytes: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().to_vec()
}

/// Hex rendering of [`unit_hash`], for display.
#[must_use]
pub fn unit_hash_hex(bytes: &[u8]) -> String {
    hex::encode(unit_hash(bytes))
}

///
/// TESTS
///
