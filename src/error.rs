//! Error types for acct_fingerprint

use thiserror::Error;

/// Result type alias for acct_fingerprint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading records or configuring the hashers
///
/// The aggregators themselves are total over their input and never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record input: {0}")]
    InvalidRecord(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(#[from] hex::FromHexError),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Config error: {0}")]
    Config(String),
}
