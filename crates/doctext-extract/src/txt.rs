use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TxtError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

/// Read a plain-text file as UTF-8.
///
/// The content is returned untouched, byte-order mark included; the cleaner
/// removes it along with other non-word characters.
pub fn extract_txt(path: &Path) -> Result<String, TxtError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| TxtError::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "Hello,   World!\n\nThis is   a test.").unwrap();

        assert_eq!(
            extract_txt(&path).unwrap(),
            "Hello,   World!\n\nThis is   a test."
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9 au lait").unwrap();

        let err = extract_txt(&path).unwrap_err();
        assert!(matches!(err, TxtError::InvalidUtf8 { offset: 3 }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_extract_nonexistent_file() {
        let result = extract_txt(Path::new("/nonexistent/file.txt"));
        assert!(matches!(result, Err(TxtError::Io(_))));
    }
}
