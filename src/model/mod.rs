//! Core data model types for acct_fingerprint

mod digest;
mod fingerprint;

pub use digest::{Digest, DIGEST_LEN};
pub use fingerprint::{Fingerprint, Timed};
