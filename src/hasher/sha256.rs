//! SHA-256 record hasher

use super::{HashAlgorithm, RecordHasher};
use crate::model::Digest;
use sha2::{Digest as _, Sha256};

/// SHA-256, matching the reference account-hashing programs
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl RecordHasher for Sha256Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }

    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_bytes(Sha256::digest(data).into())
    }

    fn digest_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_bytes(hasher.finalize().into())
    }
}
