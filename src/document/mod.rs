//! Document I/O shell
//!
//! Reads the input file as raw bytes, runs character-encoding detection
//! over the whole buffer, decodes to a string, and writes the processed
//! result back out as UTF-8.

use crate::domain::{PseudonymError, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Read a document, detecting its encoding from the full byte buffer
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PseudonymError::FileNotFound(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let bytes = fs::read(path).map_err(|e| {
        PseudonymError::Io(format!("Failed to read input file {}: {}", path.display(), e))
    })?;

    let encoding = detect_encoding(&bytes);
    tracing::debug!(
        encoding = encoding.name(),
        bytes = bytes.len(),
        path = %path.display(),
        "Detected input encoding"
    );

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(PseudonymError::Decode(format!(
            "Input file {} is not valid {}",
            path.display(),
            encoding.name()
        )));
    }

    Ok(text.into_owned())
}

/// Write the processed document as UTF-8, creating or truncating the file
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes()).map_err(|e| {
        PseudonymError::Io(format!(
            "Failed to write output file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Best-guess encoding over the full byte buffer
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_utf8_document() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Alice Smith café".as_bytes()).unwrap();
        file.flush().unwrap();

        let text = read_document(file.path()).unwrap();
        assert_eq!(text, "Alice Smith café");
    }

    #[test]
    fn test_read_latin1_document() {
        let mut file = NamedTempFile::new().unwrap();
        // "café" in ISO-8859-1
        file.write_all(b"caf\xe9").unwrap();
        file.flush().unwrap();

        let text = read_document(file.path()).unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn test_read_missing_file_is_file_not_found() {
        let result = read_document(Path::new("/nonexistent/input.txt"));
        assert!(matches!(result, Err(PseudonymError::FileNotFound(_))));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_document(&path, "Jordan Lee went home.\n").unwrap();
        let text = read_document(&path).unwrap();
        assert_eq!(text, "Jordan Lee went home.\n");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_document(&path, "a much longer earlier version of the file").unwrap();
        write_document(&path, "short").unwrap();
        assert_eq!(read_document(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_to_invalid_path_is_io_error() {
        let result = write_document(Path::new("/nonexistent/dir/out.txt"), "text");
        assert!(matches!(result, Err(PseudonymError::Io(_))));
    }
}
