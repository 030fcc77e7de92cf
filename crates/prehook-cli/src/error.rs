//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes.

use prehook_core::paths::PathError;
use prehook_core::{ConfigError, CoreError, ResolveError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error without a more specific category.
    #[error("{0}")]
    Core(String),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),

    /// One or more hooks failed.
    #[error("{failed} hook(s) failed")]
    HooksFailed { failed: usize },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Hook failure or general error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) | Self::HooksFailed { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }

    /// Categorize a core error.
    pub fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Config(e) => Self::Config(e.to_string()),
            CoreError::Resolve(ResolveError::Cache(msg)) => Self::Io(msg.clone()),
            CoreError::Resolve(e) => Self::Config(e.to_string()),
            CoreError::Exec(e) => Self::Process(e.to_string()),
            CoreError::Settings(e) => Self::Config(e.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg.clone()),
        }
    }

    /// Categorize a path error.
    pub fn from_path(err: &PathError) -> Self {
        match err {
            PathError::ConfigNotFound { .. } => Self::Config(err.to_string()),
            _ => Self::Io(err.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::from_path(&err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned by a handler.
///
/// Handlers return `anyhow::Error`; the concrete error inside decides the
/// code. Anything unrecognised exits with 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<CliError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<CoreError>() {
        return CliError::from_core(e).exit_code();
    }
    if let Some(e) = err.downcast_ref::<PathError>() {
        return CliError::from_path(e).exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some()
        || err.downcast_ref::<SettingsError>().is_some()
        || err.downcast_ref::<ResolveError>().is_some()
    {
        return 78;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return 74;
    }
    1
}
