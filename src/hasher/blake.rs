//! BLAKE3 record hasher

use super::{HashAlgorithm, RecordHasher};
use crate::model::Digest;

/// BLAKE3 with its default 32-byte output
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hasher;

impl RecordHasher for Blake3Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Blake3
    }

    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_bytes(*blake3::hash(data).as_bytes())
    }

    fn digest_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_bytes(*hasher.finalize().as_bytes())
    }
}
