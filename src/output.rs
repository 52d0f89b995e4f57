//! Output file location and atomic writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::CardError;

/// File name of the composed card.
pub const OUTPUT_FILE_NAME: &str = "cat-card.jpg";

/// Path of the card inside `dir`.
#[must_use]
pub fn output_path(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE_NAME)
}

/// Write `data` to `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the same directory first and are
/// renamed into place, so `path` never holds a partial card.
///
/// # Errors
///
/// Returns [`CardError::Write`] if the temporary file cannot be created,
/// written, or renamed.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CardError> {
    let write_err = |source| CardError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_in_given_dir() {
        assert_eq!(output_path(Path::new("/tmp/work")), PathBuf::from("/tmp/work/cat-card.jpg"));
    }

    #[test]
    fn writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path());

        write_atomic(&path, b"card").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"card");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path());
        std::fs::write(&path, b"an older and longer card").unwrap();

        write_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        write_atomic(&output_path(dir.path()), b"card").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![OUTPUT_FILE_NAME.to_string()]);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let err = write_atomic(Path::new("/nonexistent/dir/cat-card.jpg"), b"card").unwrap_err();
        assert!(matches!(err, CardError::Write { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/cat-card.jpg"));
    }
}
