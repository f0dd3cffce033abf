//! # acct_fingerprint
//!
//! Order-independent fingerprints over a set of account records.
//!
//! Two complementary values are computed over the same unordered records:
//!
//! - **ADH** (Aggregate Data Hash): the root of a Merkle tree built over the
//!   byte-sorted records. Any change to any record changes it.
//! - **ALH** (Aggregate Linear Hash): the sum, modulo 2^64, of the
//!   little-endian `u64` prefix of every record's digest. Cheap and
//!   commutative, but only a checksum.
//!
//! Both depend only on the multiset of records, never on input order.
//!
//! ## Example
//!
//! ```
//! use acct_fingerprint::{compute_adh, compute_alh};
//!
//! let records: Vec<Vec<u8>> = vec![b"c".to_vec(), b"a".to_vec(), b"b".to_vec()];
//! let (adh, _elapsed) = compute_adh(&records);
//! let (alh, _elapsed) = compute_alh(&records);
//!
//! assert_eq!(adh.len(), 64);
//! assert_eq!(alh, 17838940038102399030);
//! ```

pub mod aggregate;
pub mod config;
pub mod hasher;
pub mod logging;
pub mod model;
pub mod records;

mod error;

pub use aggregate::{adh, alh, compute_adh, compute_alh, LinearAggregator, MerkleAggregator};
pub use config::Config;
pub use error::{Error, Result};
pub use hasher::{
    digest, digest_prefix_u64, Blake3Hasher, HashAlgorithm, RecordHasher, Sha256Hasher,
};
pub use model::{Digest, Fingerprint, Timed, DIGEST_LEN};
pub use records::RecordFormat;
