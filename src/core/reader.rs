//! Text ingestion
//!
//! Consistent handling for non-UTF-8 and binary input files. Binary files
//! (NUL bytes in the first 8 KiB) are rejected with a typed error so callers
//! can decide whether that is fatal (single-file run) or a per-file warning
//! (directory run). Invalid UTF-8 is read with lossy conversion and flagged.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Size of the prefix sniffed for NUL bytes.
const BINARY_SNIFF_LEN: usize = 8192;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} appears to be binary (contains NUL bytes)")]
    Binary { path: String },
}

/// A successfully read text file.
#[derive(Debug, Clone)]
pub struct TextFile {
    pub content: String,

    /// Whether lossy UTF-8 conversion was applied.
    pub lossy: bool,
}

/// Read a file as text.
pub fn read_text(path: &Path) -> Result<TextFile, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let sniff_len = bytes.len().min(BINARY_SNIFF_LEN);
    if bytes[..sniff_len].contains(&0) {
        return Err(ReadError::Binary {
            path: path.display().to_string(),
        });
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(TextFile {
            content,
            lossy: false,
        }),
        Err(err) => Ok(TextFile {
            content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            lossy: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "Hello, World!").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text.content, "Hello, World!");
        assert!(!text.lossy);
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xFE, b'H', b'i']).unwrap();

        let text = read_text(&path).unwrap();
        assert!(text.lossy);
        assert!(text.content.contains("Hi"));
    }

    #[test]
    fn test_read_binary_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x00u8, 0x01, 0x02, 0x00]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, ReadError::Binary { .. }));
        assert!(err.to_string().contains("binary"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let text = read_text(&path).unwrap();
        assert!(text.content.is_empty());
        assert!(!text.lossy);
    }
}
