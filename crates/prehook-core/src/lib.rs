//! Core domain for prehook, a configuration-driven hook runner.
//!
//! This crate owns everything that is independent of the operating system:
//! the hook configuration and manifest types, YAML loading and validation,
//! file selection, the port traits implemented by `prehook-runtime`, and the
//! [`HookRunService`] that applies the run policy.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod selection;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use config::{
    ConfigError, ValidationReport, load_config, load_manifest, parse_config, parse_manifest,
    sample_config, to_yaml, validate_config, validate_manifest,
};
pub use domain::{
    DEFAULT_CONFIG_FILE, HookConfig, HookEntry, HookOutcome, HookResult, LOCAL_REPO,
    MANIFEST_FILE, ManifestHook, RepoConfig, ResolvedHook, RunReport,
};
pub use ports::{
    CoreError, ExecError, ExecOutput, HookExecutor, HookInvocation, NoopRunEvents, RepoResolver,
    ResolveError, ResolvedRepo, RunEvent, RunEventSink,
};
pub use selection::{FileFilter, tags_for_file, tags_for_path};
pub use services::{HookRunService, NO_FILES_REASON, RunOptions};
pub use settings::{
    DEFAULT_HOOK_TIMEOUT_SECS, DEFAULT_MAX_FILES_PER_BATCH, RunnerSettings, SettingsError,
    validate_settings,
};

// Silence unused dev-dependency warnings; used by integration tests only
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
