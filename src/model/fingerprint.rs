//! Combined ADH/ALH result and timing wrapper

use super::Digest;
use crate::hasher::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// A value together with the wall-clock time it took to produce
///
/// Timing is diagnostic only and never part of a fingerprint's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Run `f` and record how long it took
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        Timed {
            value,
            elapsed: start.elapsed(),
        }
    }

    /// Transform the value, keeping the measured time
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    /// Split into `(value, elapsed)`
    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }
}

/// Both aggregate fingerprints of one record set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Primitive both values were computed with
    pub algorithm: HashAlgorithm,
    /// Number of records in the set
    pub records: usize,
    /// Aggregate Data Hash (Merkle root)
    pub adh: Digest,
    /// Aggregate Linear Hash (wrapping sum of digest prefixes)
    pub alh: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_map_keeps_elapsed() {
        let timed = Timed::measure(|| 21u64);
        let elapsed = timed.elapsed;
        let doubled = timed.map(|v| v * 2);
        assert_eq!(doubled.value, 42);
        assert_eq!(doubled.elapsed, elapsed);
    }

    #[test]
    fn test_fingerprint_json_shape() {
        let fp = Fingerprint {
            algorithm: HashAlgorithm::Sha256,
            records: 2,
            adh: Digest::from_bytes([0u8; 32]),
            alh: u64::MAX,
        };
        let value = serde_json::to_value(fp).unwrap();
        assert_eq!(value["algorithm"], "sha256");
        assert_eq!(value["records"], 2);
        assert_eq!(value["adh"], "0".repeat(64));
        assert_eq!(value["alh"], u64::MAX);
    }
}
