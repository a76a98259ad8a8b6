//! Directory creation helper used before launching the daemon.

use std::fs;
use std::path::Path;

use crate::error::ControlError;

/// Ensure the provided directory exists, creating it (and parents) if
/// missing. An existing non-directory at the path is an error.
pub fn ensure_directory(path: &Path) -> Result<(), ControlError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(ControlError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| ControlError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("run/nested");

        ensure_directory(&target).expect("ensure");
        assert!(target.is_dir());

        // Idempotent on an existing directory
        ensure_directory(&target).expect("ensure again");
    }

    #[test]
    fn rejects_file_at_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("run");
        std::fs::write(&target, b"not a dir").expect("write");

        let err = ensure_directory(&target).expect_err("should reject");
        assert!(matches!(err, ControlError::NotADirectory(_)));
    }
}
