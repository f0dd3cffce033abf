//! Aggregate Data Hash: a Merkle root over byte-sorted records

use super::DEFAULT_PARALLEL_THRESHOLD;
use crate::config::Config;
use crate::hasher::{HashAlgorithm, RecordHasher};
use crate::model::{Digest, Timed};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the ADH of a record set
///
/// Records are sorted byte-lexicographically before hashing, so the root only
/// depends on the multiset of records. Odd levels duplicate their last digest
/// before pairing; a parent is `H(left ++ right)`.
#[derive(Clone, Copy, Debug)]
pub struct MerkleAggregator {
    algorithm: HashAlgorithm,
    parallel_threshold: usize,
}

impl MerkleAggregator {
    /// Create an aggregator for the given primitive
    pub fn new(algorithm: HashAlgorithm) -> Self {
        MerkleAggregator {
            algorithm,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create an aggregator from config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.algorithm).with_parallel_threshold(config.parallel_threshold)
    }

    /// Levels with at least `threshold` digests are hashed in parallel
    ///
    /// Has no effect without the `parallel` feature.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn hasher(&self) -> &'static dyn RecordHasher {
        self.algorithm.hasher()
    }

    #[cfg(feature = "parallel")]
    fn parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    /// Sort the records and hash each one, in sorted order
    pub fn leaves<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> Vec<Digest> {
        let mut sorted: Vec<&[u8]> = records.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let hasher = self.hasher();

        #[cfg(feature = "parallel")]
        if self.parallel(sorted.len()) {
            return sorted.par_iter().map(|r| hasher.digest(r)).collect();
        }

        sorted.iter().map(|r| hasher.digest(r)).collect()
    }

    /// One fold: pair adjacent digests left to right and hash each pair
    ///
    /// An odd trailing digest is paired with itself. A level of zero or one
    /// digests is returned unchanged.
    pub fn fold_level(&self, level: &[Digest]) -> Vec<Digest> {
        if level.len() <= 1 {
            return level.to_vec();
        }

        let hasher = self.hasher();
        let parent = |pair: &[Digest]| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            hasher.digest_pair(left, right)
        };

        #[cfg(feature = "parallel")]
        if self.parallel(level.len()) {
            return level.par_chunks(2).map(parent).collect();
        }

        level.chunks(2).map(parent).collect()
    }

    /// Every level of the tree, leaves first, root last
    ///
    /// An empty record set yields a single level holding the empty-input
    /// sentinel.
    pub fn levels<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> Vec<Vec<Digest>> {
        let mut level = self.leaves(records);
        if level.is_empty() {
            return vec![vec![self.hasher().empty_digest()]];
        }

        let mut levels = Vec::new();
        while level.len() > 1 {
            let next = self.fold_level(&level);
            levels.push(level);
            level = next;
        }
        levels.push(level);
        levels
    }

    /// The ADH root digest
    ///
    /// Zero records resolve to the digest of the empty byte string; one record
    /// resolves to that record's digest.
    pub fn root<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> Digest {
        let mut level = self.leaves(records);
        let mut depth = 0usize;

        while level.len() > 1 {
            trace!(depth, width = level.len(), "folding merkle level");
            level = self.fold_level(&level);
            depth += 1;
        }

        match level.first() {
            Some(root) => *root,
            None => self.hasher().empty_digest(),
        }
    }

    /// The ADH root digest with elapsed time
    pub fn compute<R: AsRef<[u8]> + Sync>(&self, records: &[R]) -> Timed<Digest> {
        let timed = Timed::measure(|| self.root(records));
        debug!(
            algorithm = %self.algorithm,
            records = records.len(),
            root = %timed.value.short(),
            elapsed_us = timed.elapsed.as_micros() as u64,
            "computed aggregate data hash"
        );
        timed
    }
}

impl Default for MerkleAggregator {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
