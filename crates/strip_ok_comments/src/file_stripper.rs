// crates/strip_ok_comments/src/file_stripper.rs

use anyhow::{Context, Result};
use filter_marker_lines::strip_marker_lines;
use std::fs;
use std::path::Path;

/// Trait that abstracts rewriting a single file.
pub trait FileStripper {
    /// Rewrites the file at `path` without its marker lines and returns how
    /// many lines were removed.
    fn strip_file(&self, path: &Path) -> Result<usize>;
}

/// Reads the whole file as UTF-8, drops marker lines and overwrites the file
/// in place.
///
/// The rewrite truncates and writes at the same path; there is no temporary
/// file, so a failed write can leave the file truncated.
pub struct DefaultFileStripper;

impl FileStripper for DefaultFileStripper {
    fn strip_file(&self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display()))?;

        let (kept, removed) = strip_marker_lines(&content);

        fs::write(path, kept)
            .with_context(|| format!("Error writing file {}", path.display()))?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strip_file_rewrites_in_place() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "int x = 1;\n  // Ok\nint y = 2;\n").unwrap();

        let removed = DefaultFileStripper.strip_file(temp_file.path()).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(
            fs::read_to_string(temp_file.path()).unwrap(),
            "int x = 1;\nint y = 2;\n"
        );
    }

    #[test]
    fn test_strip_file_without_markers_keeps_bytes() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "a\r\n// not ok\r\n\tb";
        write!(temp_file, "{}", content).unwrap();

        let removed = DefaultFileStripper.strip_file(temp_file.path()).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(fs::read(temp_file.path()).unwrap(), content.as_bytes());
    }

    #[test]
    fn test_invalid_utf8_is_an_error_and_file_untouched() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let bytes = [0x2f, 0x2f, 0x20, 0x6f, 0x6b, 0x0a, 0xff, 0xfe, 0x0a];
        temp_file.write_all(&bytes).unwrap();

        let err = DefaultFileStripper.strip_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Error reading file"));
        assert_eq!(fs::read(temp_file.path()).unwrap(), bytes);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("GoneInput.java");

        let err = DefaultFileStripper.strip_file(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("GoneInput.java"));
        assert!(!missing.exists());
    }
}
