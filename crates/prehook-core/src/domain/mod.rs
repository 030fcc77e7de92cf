//! Domain types for hook configuration, manifests and run reports.
//!
//! These are pure data types with serde support and no infrastructure
//! dependencies. Loading and validation live in [`crate::config`].

mod config;
mod hook;
mod manifest;
mod report;

pub use config::{DEFAULT_CONFIG_FILE, HookConfig, HookEntry, LOCAL_REPO, RepoConfig};
pub use hook::ResolvedHook;
pub use manifest::{MANIFEST_FILE, ManifestHook};
pub use report::{HookOutcome, HookResult, RunReport};
