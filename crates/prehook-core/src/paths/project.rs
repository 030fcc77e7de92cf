//! Locating the project's hook configuration.

use std::path::{Path, PathBuf};

use super::error::PathError;
use crate::domain::DEFAULT_CONFIG_FILE;

/// Resolve the configuration file for a project root.
///
/// An explicit override is taken as-is (relative overrides are joined to
/// `root`).
pub fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_CONFIG_FILE),
    }
}

/// Walk up from `start` to the first directory containing the default
/// configuration file.
pub fn find_project_root(start: &Path) -> Result<PathBuf, PathError> {
    start
        .ancestors()
        .find(|dir| dir.join(DEFAULT_CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| PathError::ConfigNotFound {
            file: DEFAULT_CONFIG_FILE.to_string(),
            dir: start.to_path_buf(),
        })
}
