//! Hook executor trait definition.
//!
//! This port runs one invocation of a hook command. Implementations handle
//! process spawning, output capture and timeouts internally.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;

use super::ExecError;
use crate::domain::ResolvedHook;

/// One invocation of a hook against a batch of files.
///
/// This is an intent-based description: what to run and where, not how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookInvocation {
    pub hook_id: String,
    /// Command line from the manifest or config, program first.
    pub entry: String,
    pub language: String,
    pub language_version: String,
    /// Checkout directory of the hook's repository, if any.
    pub repo_path: Option<PathBuf>,
    /// Arguments placed after the entry.
    pub args: Vec<String>,
    /// Dependency specifiers the hook's environment is expected to provide.
    pub additional_dependencies: Vec<String>,
    /// Files appended after the arguments (relative to `work_dir`).
    pub files: Vec<PathBuf>,
    /// Working directory for the process (the project root).
    pub work_dir: PathBuf,
}

impl HookInvocation {
    /// Build an invocation of `hook` for a batch of files.
    pub fn new(hook: &ResolvedHook, files: Vec<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            hook_id: hook.id.clone(),
            entry: hook.entry.clone(),
            language: hook.language.clone(),
            language_version: hook.language_version.clone(),
            repo_path: hook.repo_path.clone(),
            args: hook.args.clone(),
            additional_dependencies: hook.additional_dependencies.clone(),
            files,
            work_dir: work_dir.into(),
        }
    }
}

/// Captured result of one process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

impl ExecOutput {
    /// Create an output record.
    pub fn new(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// Whether the process exited zero.
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Executor for hook invocations.
///
/// # Design Rules
///
/// - A non-zero exit is a normal `Ok` result, not an error
/// - `Err` means the hook could not be run (missing program, timeout)
#[async_trait]
pub trait HookExecutor: Send + Sync {
    /// Run one invocation to completion.
    async fn execute(&self, invocation: &HookInvocation) -> Result<ExecOutput, ExecError>;
}
