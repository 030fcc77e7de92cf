//! Loading, serializing and validating hook configuration and manifests.
//!
//! # Design
//!
//! - Parsing is schema-level only (types and required keys)
//! - Structural rules live in [`validate_config`] / [`validate_manifest`]
//! - Sequences are order-preserving in both directions

mod sample;
mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::{HookConfig, ManifestHook};

pub use sample::sample_config;
pub use validate::{ValidationReport, validate_config, validate_manifest};

/// Errors for malformed declarations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The document is not valid YAML or does not match the schema.
    #[error("Malformed configuration: {0}")]
    Parse(String),

    /// Re-serialization failed.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// The document parsed but violates structural rules.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// A `files` or `exclude` pattern does not compile.
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn with_path(path: &Path, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::Parse(msg) => ConfigError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    }
}

/// Parse a hook configuration from YAML text.
pub fn parse_config(text: &str) -> Result<HookConfig, ConfigError> {
    if text.trim().is_empty() {
        return Err(ConfigError::Parse("document is empty".to_string()));
    }
    serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse a hook configuration file.
pub fn load_config(path: &Path) -> Result<HookConfig, ConfigError> {
    debug!(path = %path.display(), "Loading hook configuration");
    let text = read_file(path)?;
    let config = parse_config(&text).map_err(|e| with_path(path, e))?;
    debug!(
        repos = config.repos.len(),
        hooks = config.hook_count(),
        fail_fast = config.fail_fast,
        "Loaded hook configuration"
    );
    Ok(config)
}

/// Serialize a hook configuration back to YAML.
pub fn to_yaml(config: &HookConfig) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
}

/// Parse a repository hook manifest (a YAML sequence of hooks).
pub fn parse_manifest(text: &str) -> Result<Vec<ManifestHook>, ConfigError> {
    if text.trim().is_empty() {
        return Err(ConfigError::Parse("manifest is empty".to_string()));
    }
    serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse a repository hook manifest.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestHook>, ConfigError> {
    let text = read_file(path)?;
    parse_manifest(&text).map_err(|e| with_path(path, e))
}
