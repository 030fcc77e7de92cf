//! Working set of files handed to a run.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use walkdir::WalkDir;

/// Every regular file under `root`, relative to it, skipping `.git`.
pub fn walk_project(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ".git");

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(files)
}

/// Normalize explicitly named files to paths relative to `root`.
///
/// Relative names are taken from `cwd`, which may be below `root`. Files
/// outside `root` keep their full path. Missing files are kept (hooks decide
/// what to do with them) but logged.
pub fn explicit_files(root: &Path, cwd: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| {
            let full = normalize(&cwd.join(file));
            let relative = full
                .strip_prefix(root)
                .map_or_else(|_| full.clone(), Path::to_path_buf);
            if !root.join(&relative).exists() {
                warn!(file = %relative.display(), "File does not exist");
            }
            relative
        })
        .collect()
}

/// Lexically drop `.` components and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
