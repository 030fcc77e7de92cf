//! Repository resolver backed by git checkouts in a local cache.

mod cache;
mod git;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use prehook_core::paths::{ensure_directory, repos_dir};
use prehook_core::{
    MANIFEST_FILE, RepoConfig, RepoResolver, ResolveError, ResolvedRepo, load_manifest,
    validate_manifest,
};
use tracing::{debug, info};

use cache::checkout_name;
use git::run_git;

/// Reserved reference for hooks built into the runner itself.
const META_REPO: &str = "meta";

/// Resolves repositories by checking them out under `<cache>/repos`.
///
/// Each `repo@rev` gets its own directory. A checkout is staged in a
/// temporary directory and renamed into place once complete, so a directory
/// under `repos/` is always a finished checkout and is reused as-is.
#[derive(Debug, Clone)]
pub struct GitRepoResolver {
    cache_dir: PathBuf,
}

impl GitRepoResolver {
    /// Create a resolver rooted at `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Directory holding all checkouts.
    pub fn repos_dir(&self) -> PathBuf {
        repos_dir(&self.cache_dir)
    }

    /// Checkout directory for `repo` at `rev`.
    pub fn checkout_dir(&self, repo: &str, rev: &str) -> PathBuf {
        self.repos_dir().join(checkout_name(repo, rev))
    }

    async fn checkout(&self, repo: &str, rev: &str, dest: &Path) -> Result<(), ResolveError> {
        let repos = self.repos_dir();
        ensure_directory(&repos).map_err(|e| ResolveError::Cache(e.to_string()))?;

        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(&repos)
            .map_err(|e| ResolveError::Cache(e.to_string()))?;
        let work = staging.path();

        let not_found = |e: anyhow::Error| ResolveError::RepositoryNotFound {
            repo: repo.to_string(),
            reason: format!("{e:#}"),
        };

        run_git(work, &["init", "--quiet"]).await.map_err(not_found)?;
        run_git(work, &["remote", "add", "origin", repo])
            .await
            .map_err(not_found)?;

        let shallow = run_git(work, &["fetch", "--quiet", "--depth", "1", "origin", rev]).await;
        match shallow {
            Ok(_) => {
                run_git(work, &["checkout", "--quiet", "FETCH_HEAD"])
                    .await
                    .map_err(not_found)?;
            }
            Err(e) => {
                debug!(repo, rev, error = %e, "Shallow fetch refused, fetching full history");
                run_git(work, &["fetch", "--quiet", "--tags", "origin"])
                    .await
                    .map_err(not_found)?;
                run_git(work, &["checkout", "--quiet", rev])
                    .await
                    .map_err(|e| ResolveError::RevisionNotFound {
                        repo: repo.to_string(),
                        rev: rev.to_string(),
                        reason: format!("{e:#}"),
                    })?;
            }
        }

        if let Err(e) = tokio::fs::rename(work, dest).await {
            // Another run may have published the same checkout first.
            if !dest.is_dir() {
                return Err(ResolveError::Cache(format!(
                    "failed to publish checkout {}: {e}",
                    dest.display()
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RepoResolver for GitRepoResolver {
    async fn resolve(&self, repo: &RepoConfig) -> Result<ResolvedRepo, ResolveError> {
        if repo.is_local() {
            return Err(ResolveError::Unsupported(
                "local hooks are defined inline and have no checkout".to_string(),
            ));
        }
        if repo.repo == META_REPO {
            return Err(ResolveError::Unsupported(
                "meta hooks are not supported".to_string(),
            ));
        }

        let rev = repo.rev_or_empty();
        if rev.is_empty() {
            return Err(ResolveError::RevisionNotFound {
                repo: repo.repo.clone(),
                rev: String::new(),
                reason: "no revision pinned".to_string(),
            });
        }

        let dest = self.checkout_dir(&repo.repo, rev);
        if dest.is_dir() {
            debug!(repo = %repo.repo, rev, path = %dest.display(), "Using cached checkout");
        } else {
            info!(repo = %repo.repo, rev, "Fetching hook repository");
            self.checkout(&repo.repo, rev, &dest).await?;
        }

        let invalid = |reason: String| ResolveError::InvalidManifest {
            repo: repo.repo.clone(),
            rev: rev.to_string(),
            reason,
        };
        let manifest = load_manifest(&dest.join(MANIFEST_FILE)).map_err(|e| invalid(e.to_string()))?;
        validate_manifest(&manifest).map_err(|e| invalid(e.to_string()))?;

        Ok(ResolvedRepo {
            path: dest,
            manifest,
        })
    }

    async fn clean(&self) -> Result<(), ResolveError> {
        let repos = self.repos_dir();
        if !repos.exists() {
            debug!(path = %repos.display(), "Repository cache already empty");
            return Ok(());
        }
        tokio::fs::remove_dir_all(&repos)
            .await
            .map_err(|e| ResolveError::Cache(format!("failed to remove {}: {e}", repos.display())))?;
        info!(path = %repos.display(), "Removed repository cache");
        Ok(())
    }
}
