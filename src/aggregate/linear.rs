//! Aggregate Linear Hash: a wrapping sum of digest prefixes

use super::DEFAULT_PARALLEL_THRESHOLD;
use crate::config::Config;
use crate::hasher::{HashAlgorithm, RecordHasher};
use crate::model::Timed;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the ALH of a record set
///
/// Each record contributes the little-endian `u64` prefix of its digest. The
/// contributions are added modulo 2^64, so no sort is needed and overflow is
/// the defined behavior. This is a checksum: distinct record sets can collide.
#[derive(Clone, Copy, Debug)]
pub struct LinearAggregator {
    algorithm: HashAlgorithm,
    parallel_threshold: usize,
}

impl LinearAggregator {
    /// Create an aggregator for the given primitive
    pub fn new(algorithm: HashAlgorithm) -> Self {
        LinearAggregator {
            algorithm,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create an aggregator from config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.algorithm).with_parallel_threshold(config.parallel_threshold)
    }

    /// Record sets with at least `threshold` entries are hashed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The ALH value; zero for an empty set
    pub fn checksum<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> u64 {
        let hasher: &dyn RecordHasher = self.algorithm.hasher();

        #[cfg(feature = "parallel")]
        if records.len() >= self.parallel_threshold {
            return records
                .par_iter()
                .map(|r| hasher.digest_prefix_u64(r.as_ref()))
                .reduce(|| 0, u64::wrapping_add);
        }

        wrapping_sum(records.iter().map(|r| hasher.digest_prefix_u64(r.as_ref())))
    }

    /// The ALH value with elapsed time
    pub fn compute<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> Timed<u64> {
        let timed = Timed::measure(|| self.checksum(records));
        debug!(
            algorithm = %self.algorithm,
            records = records.len(),
            alh = timed.value,
            elapsed_us = timed.elapsed.as_micros() as u64,
            "computed aggregate linear hash"
        );
        timed
    }
}

impl Default for LinearAggregator {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

/// Add values modulo 2^64
pub fn wrapping_sum(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(0u64, u64::wrapping_add)
}
