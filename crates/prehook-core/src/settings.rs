//! Runner settings and validation.
//!
//! Settings tune how hooks are run (timeouts, batching, cache location).
//! They never change which hooks run; that is the config's job.

use std::path::PathBuf;

/// Default per-invocation timeout.
pub const DEFAULT_HOOK_TIMEOUT_SECS: u64 = 600;

/// Default number of filenames passed to a single invocation.
pub const DEFAULT_MAX_FILES_PER_BATCH: usize = 1000;

/// Environment variable overriding the cache directory.
pub const ENV_HOME: &str = "PREHOOK_HOME";
/// Environment variable overriding the hook timeout (seconds).
pub const ENV_HOOK_TIMEOUT: &str = "PREHOOK_HOOK_TIMEOUT";
/// Environment variable overriding the batch size.
pub const ENV_MAX_FILES_PER_BATCH: &str = "PREHOOK_MAX_FILES_PER_BATCH";

/// Runner settings.
///
/// All fields are optional so that unset values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerSettings {
    /// Root of the repository cache.
    pub cache_dir: Option<PathBuf>,

    /// Timeout for a single hook invocation, in seconds.
    pub hook_timeout_secs: Option<u64>,

    /// Maximum filenames per invocation; larger sets are split.
    pub max_files_per_batch: Option<usize>,
}

impl RunnerSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            cache_dir: None,
            hook_timeout_secs: Some(DEFAULT_HOOK_TIMEOUT_SECS),
            max_files_per_batch: Some(DEFAULT_MAX_FILES_PER_BATCH),
        }
    }

    /// Get the effective hook timeout (with default fallback).
    #[must_use]
    pub const fn effective_hook_timeout_secs(&self) -> u64 {
        match self.hook_timeout_secs {
            Some(secs) => secs,
            None => DEFAULT_HOOK_TIMEOUT_SECS,
        }
    }

    /// Get the effective batch size (with default fallback).
    #[must_use]
    pub const fn effective_max_files_per_batch(&self) -> usize {
        match self.max_files_per_batch {
            Some(n) => n,
            None => DEFAULT_MAX_FILES_PER_BATCH,
        }
    }

    /// Apply overrides from environment-style lookups.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; tests pass a map.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(home) = lookup(ENV_HOME) {
            self.cache_dir = Some(PathBuf::from(home));
        }
        if let Some(raw) = lookup(ENV_HOOK_TIMEOUT) {
            let secs = raw.trim().parse().map_err(|_| SettingsError::InvalidEnvValue {
                key: ENV_HOOK_TIMEOUT,
                value: raw.clone(),
            })?;
            self.hook_timeout_secs = Some(secs);
        }
        if let Some(raw) = lookup(ENV_MAX_FILES_PER_BATCH) {
            let n = raw.trim().parse().map_err(|_| SettingsError::InvalidEnvValue {
                key: ENV_MAX_FILES_PER_BATCH,
                value: raw.clone(),
            })?;
            self.max_files_per_batch = Some(n);
        }
        Ok(self)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Hook timeout must be between 1 and 86,400 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Max files per batch must be between 1 and 10,000, got {0}")]
    InvalidBatchSize(usize),

    #[error("Cache directory cannot be empty")]
    EmptyCacheDir,

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &RunnerSettings) -> Result<(), SettingsError> {
    if let Some(secs) = settings.hook_timeout_secs {
        if !(1..=86_400).contains(&secs) {
            return Err(SettingsError::InvalidTimeout(secs));
        }
    }

    if let Some(n) = settings.max_files_per_batch {
        if !(1..=10_000).contains(&n) {
            return Err(SettingsError::InvalidBatchSize(n));
        }
    }

    if settings
        .cache_dir
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err(SettingsError::EmptyCacheDir);
    }

    Ok(())
}
