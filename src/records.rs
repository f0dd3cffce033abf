//! Record input for the harness
//!
//! The aggregators accept any `&[impl AsRef<[u8]>]`; this module only turns
//! files and byte buffers into record lists, and makes synthetic ones.

use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Read;
use std::path::Path;

/// Record size used by the reference account-hashing programs
pub const DEFAULT_RECORD_SIZE: usize = 32;

/// How records are laid out in an input file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    /// Back-to-back binary records of a fixed size
    Fixed(usize),
    /// One hex-encoded record per line; blank lines are skipped
    HexLines,
}

/// Split a buffer into fixed-size records
///
/// The buffer length must be a whole multiple of `size`.
pub fn split_fixed(data: &[u8], size: usize) -> Result<Vec<Vec<u8>>> {
    if size == 0 {
        return Err(Error::InvalidRecord("record size must be positive".into()));
    }
    if data.len() % size != 0 {
        return Err(Error::InvalidRecord(format!(
            "input length {} is not a multiple of record size {}",
            data.len(),
            size
        )));
    }
    Ok(data.chunks_exact(size).map(<[u8]>::to_vec).collect())
}

/// Parse one hex record per line
///
/// Blank lines are skipped, so this format cannot carry zero-length records.
pub fn parse_hex_lines(text: &str) -> Result<Vec<Vec<u8>>> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| {
            hex::decode(line)
                .map_err(|e| Error::InvalidRecord(format!("line {}: {}", n + 1, e)))
        })
        .collect()
}

/// Decode a buffer according to `format`
pub fn decode(data: &[u8], format: RecordFormat) -> Result<Vec<Vec<u8>>> {
    match format {
        RecordFormat::Fixed(size) => split_fixed(data, size),
        RecordFormat::HexLines => {
            let text = std::str::from_utf8(data)
                .map_err(|e| Error::InvalidRecord(format!("hex input is not UTF-8: {}", e)))?;
            parse_hex_lines(text)
        }
    }
}

/// Read and decode records from a file, or from stdin when `path` is `-`
pub fn read_records(path: &Path, format: RecordFormat) -> Result<Vec<Vec<u8>>> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };
    decode(&data, format)
}

/// Generate `count` random records of `size` bytes from a fixed seed
pub fn generate(count: usize, size: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut record = vec![0u8; size];
            rng.fill_bytes(&mut record);
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fixed() {
        let data: Vec<u8> = (0u8..64).collect();
        let records = split_fixed(&data, 32).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1][0], 32);
    }

    #[test]
    fn test_split_fixed_rejects_partial_record() {
        let err = split_fixed(&[0u8; 33], 32).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_split_fixed_rejects_zero_size() {
        assert!(split_fixed(&[], 0).is_err());
    }

    #[test]
    fn test_split_fixed_empty_input() {
        assert!(split_fixed(&[], 32).unwrap().is_empty());
    }

    #[test]
    fn test_parse_hex_lines() {
        let records = parse_hex_lines("61\n\n  6263 \n00ff\n").unwrap();
        assert_eq!(records, vec![b"a".to_vec(), b"bc".to_vec(), vec![0x00, 0xff]]);
    }

    #[test]
    fn test_parse_hex_lines_reports_line() {
        let err = parse_hex_lines("61\nzz\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {}", err);
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = generate(10, 32, 7);
        let b = generate(10, 32, 7);
        let c = generate(10, 32, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|r| r.len() == 32));
    }
}
