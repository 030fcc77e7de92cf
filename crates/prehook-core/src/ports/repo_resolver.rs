//! Repository resolver trait definition.
//!
//! This port turns a repository block into a checkout on disk plus the hooks
//! its manifest exports. Implementations own caching and fetching.

use std::path::PathBuf;

use async_trait::async_trait;

use super::ResolveError;
use crate::domain::{ManifestHook, RepoConfig};

/// A repository checked out at its pinned revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepo {
    /// Checkout directory.
    pub path: PathBuf,
    /// Hooks exported by the repository's manifest.
    pub manifest: Vec<ManifestHook>,
}

impl ResolvedRepo {
    /// Look up a manifest hook by id.
    pub fn hook(&self, id: &str) -> Option<&ManifestHook> {
        self.manifest.iter().find(|h| h.id == id)
    }
}

/// Resolver for remote hook repositories.
///
/// Local repositories never reach the resolver; the run service builds their
/// manifests from the config entries.
#[async_trait]
pub trait RepoResolver: Send + Sync {
    /// Resolve a repository at its pinned revision.
    ///
    /// Returns `ResolveError::RepositoryNotFound` or
    /// `ResolveError::RevisionNotFound` for unresolved references.
    async fn resolve(&self, repo: &RepoConfig) -> Result<ResolvedRepo, ResolveError>;

    /// Remove every cached checkout.
    async fn clean(&self) -> Result<(), ResolveError>;
}
