//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` or git details in any signature
//! - Intent-based methods: resolve a repository, execute an invocation
//! - Every error type is a semantic domain error

pub mod hook_executor;
pub mod repo_resolver;
pub mod run_events;

use thiserror::Error;

pub use hook_executor::{ExecOutput, HookExecutor, HookInvocation};
pub use repo_resolver::{RepoResolver, ResolvedRepo};
pub use run_events::{NoopRunEvents, RunEvent, RunEventSink};

use crate::config::ConfigError;

/// Errors for unresolved references.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The repository could not be reached or does not exist.
    #[error("Repository not found: {repo}: {reason}")]
    RepositoryNotFound { repo: String, reason: String },

    /// The repository exists but the revision does not.
    #[error("Revision {rev} not found in {repo}: {reason}")]
    RevisionNotFound {
        repo: String,
        rev: String,
        reason: String,
    },

    /// The checkout has no hook manifest, or it is invalid.
    #[error("Invalid hook manifest in {repo}@{rev}: {reason}")]
    InvalidManifest {
        repo: String,
        rev: String,
        reason: String,
    },

    /// The config references an id the manifest does not export.
    #[error("Hook `{id}` is not exported by {repo}@{rev}")]
    HookNotFound { repo: String, rev: String, id: String },

    /// The repository reference is of a kind this runner does not handle.
    #[error("Unsupported repository: {0}")]
    Unsupported(String),

    /// Cache or filesystem failure while resolving.
    #[error("Repository cache error: {0}")]
    Cache(String),
}

/// Errors from the executor (the hook could not run at all).
#[derive(Debug, Error)]
pub enum ExecError {
    /// The hook's program was not found.
    #[error("Executable not found: {0}")]
    NotFound(String),

    /// The `entry` is empty or cannot be split into words.
    #[error("Invalid entry {entry:?}: {reason}")]
    InvalidEntry { entry: String, reason: String },

    /// Spawning failed for another reason.
    #[error("Failed to spawn {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The hook exceeded the configured timeout and was stopped.
    #[error("Hook timed out after {0}s")]
    TimedOut(u64),

    /// IO failure while waiting for the process.
    #[error("IO error: {0}")]
    Io(String),
}

/// Core error type for the run orchestration.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed declaration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unresolved reference.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Executor failure outside a hook result.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// Runner settings are invalid.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Invalid run options (e.g. unknown `--hook` selector).
    #[error("Validation error: {0}")]
    Validation(String),
}
