//! Record hasher trait definition

use super::HashAlgorithm;
use crate::model::{Digest, DIGEST_LEN};

/// A deterministic 256-bit hash applied to records and to pairs of child digests
///
/// Implementations must be pure: the same bytes always give the same digest,
/// on every platform.
pub trait RecordHasher: Send + Sync {
    /// Which algorithm this hasher implements
    fn algorithm(&self) -> HashAlgorithm;

    /// Hash an arbitrary byte string (empty input included)
    fn digest(&self, data: &[u8]) -> Digest;

    /// Hash `left ++ right`, left operand bytes first
    ///
    /// Default implementation concatenates into a stack buffer.
    fn digest_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut buf = [0u8; DIGEST_LEN * 2];
        buf[..DIGEST_LEN].copy_from_slice(left.as_bytes());
        buf[DIGEST_LEN..].copy_from_slice(right.as_bytes());
        self.digest(&buf)
    }

    /// Digest a record and take its linear-hash contribution
    fn digest_prefix_u64(&self, data: &[u8]) -> u64 {
        self.digest(data).prefix_u64()
    }

    /// Digest of the empty byte string, used as the root of an empty record set
    fn empty_digest(&self) -> Digest {
        self.digest(&[])
    }
}
