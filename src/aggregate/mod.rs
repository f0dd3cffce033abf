//! Order-independent aggregation over record sets
//!
//! Two independent fingerprints are computed over the same records:
//! - [`MerkleAggregator`]: the Aggregate Data Hash, a Merkle root over the
//!   byte-sorted records. Sensitive to every bit of every record.
//! - [`LinearAggregator`]: the Aggregate Linear Hash, a wrapping `u64` sum of
//!   per-record digest prefixes. Cheap, commutative, but only a checksum.
//!
//! Neither aggregator keeps state between calls.

mod linear;
mod merkle;

pub use linear::{wrapping_sum, LinearAggregator};
pub use merkle::MerkleAggregator;

use crate::config::Config;
use crate::model::{Digest, Fingerprint};
use std::time::Duration;

/// Records at or above this count are hashed on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// ADH of `records` with SHA-256, as lowercase hex plus elapsed time
pub fn compute_adh<R: AsRef<[u8]> + Sync>(records: &[R]) -> (String, Duration) {
    MerkleAggregator::default()
        .compute(records)
        .map(|root| root.to_hex())
        .into_parts()
}

/// ALH of `records` with SHA-256, plus elapsed time
pub fn compute_alh<R: AsRef<[u8]> + Sync>(records: &[R]) -> (u64, Duration) {
    LinearAggregator::default().compute(records).into_parts()
}

/// ADH root digest of `records` with SHA-256
pub fn adh<R: AsRef<[u8]> + Sync>(records: &[R]) -> Digest {
    MerkleAggregator::default().root(records)
}

/// ALH of `records` with SHA-256
pub fn alh<R: AsRef<[u8]> + Sync>(records: &[R]) -> u64 {
    LinearAggregator::default().checksum(records)
}

impl Fingerprint {
    /// Compute both fingerprints with the algorithm and threshold from `config`
    ///
    /// With the `parallel` feature the two aggregators run side by side.
    pub fn compute<R: AsRef<[u8]> + Sync>(records: &[R], config: &Config) -> Fingerprint {
        let merkle = MerkleAggregator::from_config(config);
        let linear = LinearAggregator::from_config(config);

        #[cfg(feature = "parallel")]
        let (adh, alh) = rayon::join(|| merkle.root(records), || linear.checksum(records));

        #[cfg(not(feature = "parallel"))]
        let (adh, alh) = (merkle.root(records), linear.checksum(records));

        Fingerprint {
            algorithm: config.algorithm,
            records: records.len(),
            adh,
            alh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::{digest, HashAlgorithm};

    const ABC_ROOT: &str = "d31a37ef6ac14a2db1470c4316beb5592e6afd4465022339adafda76a18ffabe";

    #[test]
    fn test_compute_adh_hex_shape() {
        let records: [&[u8]; 3] = [b"c", b"a", b"b"];
        let (hex, _) = compute_adh(&records);
        assert_eq!(hex, ABC_ROOT);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_compute_alh_empty_is_zero() {
        let records: Vec<Vec<u8>> = Vec::new();
        let (value, _) = compute_alh(&records);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_compute_adh_empty_is_sentinel() {
        let records: Vec<Vec<u8>> = Vec::new();
        let (hex, _) = compute_adh(&records);
        assert_eq!(hex, digest(b"").to_hex());
    }

    #[test]
    fn test_fingerprint_matches_individual_aggregators() {
        let records: [&[u8]; 3] = [b"a", b"b", b"c"];
        let fp = Fingerprint::compute(&records, &Config::default());
        assert_eq!(fp.algorithm, HashAlgorithm::Sha256);
        assert_eq!(fp.records, 3);
        assert_eq!(fp.adh, adh(&records));
        assert_eq!(fp.alh, alh(&records));
    }

    #[test]
    fn test_fingerprint_respects_algorithm() {
        let records: [&[u8]; 3] = [b"a", b"b", b"c"];
        let config = Config {
            algorithm: HashAlgorithm::Blake3,
            ..Config::default()
        };
        let fp = Fingerprint::compute(&records, &config);
        assert_eq!(fp.algorithm, HashAlgorithm::Blake3);
        assert_ne!(fp.adh, adh(&records));
    }
}
