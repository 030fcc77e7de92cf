//! Hook configuration as authored in `.pre-commit-config.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Default configuration file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Reserved repository reference for hooks defined inline in the config.
pub const LOCAL_REPO: &str = "local";

/// Top-level hook configuration.
///
/// Sequences keep their declared order through parse and re-serialization.
/// Keys this runner does not understand are retained in `extra` so that a
/// round-trip never drops content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookConfig {
    /// Stop at the first failing hook instead of running every hook.
    #[serde(default)]
    pub fail_fast: bool,

    /// Default interpreter version per language (e.g. `python: python3.11`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_language_version: BTreeMap<String, String>,

    /// Global include pattern applied before any per-hook pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Global exclude pattern applied before any per-hook pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Repository blocks in declared order.
    pub repos: Vec<RepoConfig>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HookConfig {
    /// Total number of hook entries across all repositories.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|r| r.hooks.len()).sum()
    }

    /// Language version configured for `language`, if any.
    pub fn default_version_for(&self, language: &str) -> Option<&str> {
        self.default_language_version
            .get(language)
            .map(String::as_str)
    }
}

/// A hook source declaration: one repository pinned at one revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Repository URL, filesystem path, or [`LOCAL_REPO`].
    pub repo: String,

    /// Pinned revision (tag or commit). Not used by local repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Hook entries in declared order.
    #[serde(default)]
    pub hooks: Vec<HookEntry>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RepoConfig {
    /// Create a remote repository block.
    pub fn remote(repo: impl Into<String>, rev: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            rev: Some(rev.into()),
            ..Self::default()
        }
    }

    /// Create a local repository block.
    pub fn local() -> Self {
        Self {
            repo: LOCAL_REPO.to_string(),
            ..Self::default()
        }
    }

    /// Append a hook entry.
    #[must_use]
    pub fn with_hook(mut self, hook: HookEntry) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Whether this block defines its hooks inline.
    pub fn is_local(&self) -> bool {
        self.repo == LOCAL_REPO
    }

    /// The pinned revision, or an empty string when none is set.
    pub fn rev_or_empty(&self) -> &str {
        self.rev.as_deref().unwrap_or("")
    }
}

/// A hook entry inside a repository block.
///
/// Only `id` is required for remote repositories; every other field overrides
/// the corresponding value from the repository's manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookEntry {
    /// Identifier exported by the repository's manifest.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_or: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_types: Option<Vec<String>>,

    /// Extra dependency specifiers for the hook's environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,

    /// Invocation arguments. `Some(vec![])` clears the manifest arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HookEntry {
    /// Create an entry that references a manifest hook by id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the invocation arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Define the entry inline (for local repositories).
    #[must_use]
    pub fn with_inline(
        mut self,
        name: impl Into<String>,
        entry: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        self.name = Some(name.into());
        self.entry = Some(entry.into());
        self.language = Some(language.into());
        self
    }

    /// Whether a `--hook` selector picks this entry (by id or alias).
    pub fn matches_selector(&self, selector: &str) -> bool {
        self.id == selector || self.alias.as_deref() == Some(selector)
    }

    /// The invocation arguments, or an empty slice.
    pub fn args_or_empty(&self) -> &[String] {
        self.args.as_deref().unwrap_or(&[])
    }
}
