//! Hash algorithm selection

use super::{Blake3Hasher, RecordHasher, Sha256Hasher};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static SHA256: Sha256Hasher = Sha256Hasher;
static BLAKE3: Blake3Hasher = Blake3Hasher;

/// The digest primitive a deployment is pinned to
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    #[default]
    Sha256,
    /// BLAKE3, 256-bit output
    Blake3,
}

impl HashAlgorithm {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// The shared hasher instance for this algorithm
    pub fn hasher(&self) -> &'static dyn RecordHasher {
        match self {
            HashAlgorithm::Sha256 => &SHA256,
            HashAlgorithm::Blake3 => &BLAKE3,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("blake3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake3);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "md5"));
    }

    #[test]
    fn test_hasher_reports_its_algorithm() {
        for algo in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
            assert_eq!(algo.hasher().algorithm(), algo);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&HashAlgorithm::Blake3).unwrap();
        assert_eq!(json, "\"blake3\"");
    }
}
