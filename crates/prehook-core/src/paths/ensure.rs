//! Directory creation and verification utilities.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::error::PathError;

/// Ensure the directory exists (creating parents) and is writable.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    verify_writable(path)
}

/// Verify a directory is writable by attempting to create a test file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let test_file = path.join(".prehook_write_test");
    let result = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&test_file)
        .and_then(|mut file| file.write_all(b"ok"));

    match result {
        Ok(()) => {
            let _ = fs::remove_file(&test_file);
            Ok(())
        }
        Err(e) => Err(PathError::NotWritable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
