//! Content digests used to detect files modified by a hook.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// SHA-256 of each file (relative to `work_dir`); `None` if unreadable.
pub(super) async fn digest_files(
    work_dir: &Path,
    files: &[PathBuf],
) -> HashMap<PathBuf, Option<String>> {
    let mut digests = HashMap::with_capacity(files.len());
    for file in files {
        let digest = tokio::fs::read(work_dir.join(file))
            .await
            .ok()
            .map(|bytes| format!("{:x}", Sha256::digest(&bytes)));
        digests.insert(file.clone(), digest);
    }
    digests
}

/// Files whose digest differs between two snapshots, in `files` order.
pub(super) fn changed_files(
    files: &[PathBuf],
    before: &HashMap<PathBuf, Option<String>>,
    after: &HashMap<PathBuf, Option<String>>,
) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|f| before.get(*f) != after.get(*f))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_detects_changed_and_deleted_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("c.txt"), "c").unwrap();
        let files: Vec<PathBuf> = ["a.txt", "b.txt", "c.txt"].iter().map(PathBuf::from).collect();

        let before = digest_files(temp.path(), &files).await;
        fs::write(temp.path().join("b.txt"), "b\n").unwrap();
        fs::remove_file(temp.path().join("c.txt")).unwrap();
        let after = digest_files(temp.path(), &files).await;

        assert_eq!(
            changed_files(&files, &before, &after),
            vec![PathBuf::from("b.txt"), PathBuf::from("c.txt")]
        );
    }

    #[tokio::test]
    async fn test_missing_files_are_stable() {
        let temp = tempdir().unwrap();
        let files = vec![PathBuf::from("ghost.py")];
        let before = digest_files(temp.path(), &files).await;
        let after = digest_files(temp.path(), &files).await;
        assert!(changed_files(&files, &before, &after).is_empty());
    }
}
