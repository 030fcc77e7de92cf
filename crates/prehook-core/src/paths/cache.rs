//! Repository cache location.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use crate::settings::ENV_HOME;

/// Get the root directory for cached hook repositories.
///
/// Resolution order:
/// 1. `PREHOOK_HOME` environment variable (highest priority)
/// 2. System cache directory (e.g., `~/.cache/prehook`)
pub fn cache_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(ENV_HOME) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    dirs::cache_dir()
        .map(|dir| dir.join("prehook"))
        .ok_or(PathError::NoCacheDir)
}

/// Directory holding one checkout per `repo@rev`.
pub fn repos_dir(cache_root: &std::path::Path) -> PathBuf {
    cache_root.join("repos")
}
