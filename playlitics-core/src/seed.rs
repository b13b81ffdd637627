//! Stable seed derivation from configuration strings.
//! Same description in, same dataset out, without caller-managed seeds.

use sha2::{Digest, Sha256};

/// Derive a stable 32-bit seed from an arbitrary string.
///
/// Hashes the UTF-8 bytes with SHA-256 and reads the first four digest
/// bytes as a big-endian unsigned integer. Total function; collisions
/// are tolerable because the seed only has to be reproducible, not
/// unforgeable.
#[must_use]
pub fn derive_seed(s: &str) -> u32 {
    let digest = Sha256::digest(s.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
