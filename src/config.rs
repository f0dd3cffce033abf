//! Fingerprint configuration
//!
//! Stored as JSON in ~/.config/acctfp/config.json. A missing file means
//! defaults; a malformed one is an error.

use crate::aggregate::DEFAULT_PARALLEL_THRESHOLD;
use crate::hasher::HashAlgorithm;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by both aggregators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Digest primitive; fingerprints are only comparable under the same one
    pub algorithm: HashAlgorithm,
    /// Record/level count at which hashing moves to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: HashAlgorithm::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Default config path (~/.config/acctfp/config.json)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("acctfp").join("config.json"))
    }

    /// Load config from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from the given path, or the default path when none is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()?),
        }
    }

    /// Write config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.algorithm, HashAlgorithm::Sha256);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            algorithm: HashAlgorithm::Blake3,
            parallel_threshold: 16,
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"algorithm": "blake3"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.algorithm, HashAlgorithm::Blake3);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_unknown_algorithm_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"algorithm": "md5"}"#).unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
    }
}
