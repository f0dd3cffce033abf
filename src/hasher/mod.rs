//! Pluggable record digest primitives
//!
//! Fingerprints are only comparable when produced with the same primitive, so
//! a deployment picks one [`HashAlgorithm`] and sticks with it. SHA-256 is the
//! default and reproduces the reference account-hashing programs bit for bit.

mod algorithm;
mod blake;
mod sha256;
mod traits;

pub use algorithm::HashAlgorithm;
pub use blake::Blake3Hasher;
pub use sha256::Sha256Hasher;
pub use traits::RecordHasher;

use crate::model::Digest;

/// Hash a record with the default primitive (SHA-256)
pub fn digest(data: &[u8]) -> Digest {
    Sha256Hasher.digest(data)
}

/// Extract the little-endian `u64` prefix of a digest
pub fn digest_prefix_u64(digest: &Digest) -> u64 {
    digest.prefix_u64()
}
