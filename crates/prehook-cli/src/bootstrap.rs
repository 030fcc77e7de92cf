//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Repository resolver (via prehook-runtime)
//! - Hook executor (via prehook-runtime)
//! - The run service (via prehook-core)
//!
//! Command handlers receive the composed context and delegate work to it.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use prehook_core::paths::{cache_root, config_path, find_project_root};
use prehook_core::{
    HookExecutor, HookRunService, RepoResolver, RunnerSettings, validate_settings,
};
use prehook_runtime::{GitRepoResolver, ProcessHookExecutor};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory hooks run in; file paths are relative to it.
    pub project_root: PathBuf,
    /// Configuration file to load.
    pub config_file: PathBuf,
    /// Runner settings after environment overrides.
    pub settings: RunnerSettings,
}

impl CliConfig {
    /// Resolve the project from the current directory.
    ///
    /// Without an explicit config the project root is the nearest ancestor
    /// holding `.pre-commit-config.yaml` (or the current directory if none).
    pub fn with_defaults(explicit_config: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir()?;
        let project_root = match explicit_config {
            Some(_) => cwd,
            None => find_project_root(&cwd).unwrap_or(cwd),
        };
        let config_file = config_path(&project_root, explicit_config);

        let mut settings = RunnerSettings::with_defaults().apply_env(|k| env::var(k).ok())?;
        if settings.cache_dir.is_none() {
            settings.cache_dir = Some(cache_root()?);
        }

        Ok(Self {
            project_root,
            config_file,
            settings,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The run service.
    pub runner: HookRunService,
    /// Directory hooks run in.
    pub project_root: PathBuf,
    /// Configuration file to load.
    pub config_file: PathBuf,
    /// Root of the repository cache.
    pub cache_dir: PathBuf,
}

impl CliContext {
    /// Access the run service.
    pub const fn runner(&self) -> &HookRunService {
        &self.runner
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Validates the runner settings
/// 2. Creates the git-backed repository resolver over the cache directory
/// 3. Creates the process executor with the configured timeout
/// 4. Assembles the run service
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    validate_settings(&config.settings)?;

    let cache_dir = match config.settings.cache_dir.clone() {
        Some(dir) => dir,
        None => cache_root()?,
    };
    debug!(
        cache_dir = %cache_dir.display(),
        project_root = %config.project_root.display(),
        "Bootstrapping CLI"
    );

    let resolver: Arc<dyn RepoResolver> = Arc::new(GitRepoResolver::new(&cache_dir));
    let executor: Arc<dyn HookExecutor> =
        Arc::new(ProcessHookExecutor::from_settings(&config.settings));

    Ok(bootstrap_with(config, cache_dir, resolver, executor))
}

/// Bootstrap with custom adapters (for testing).
pub fn bootstrap_with(
    config: CliConfig,
    cache_dir: PathBuf,
    resolver: Arc<dyn RepoResolver>,
    executor: Arc<dyn HookExecutor>,
) -> CliContext {
    CliContext {
        runner: HookRunService::new(resolver, executor, config.settings),
        project_root: config.project_root,
        config_file: config.config_file,
        cache_dir,
    }
}
