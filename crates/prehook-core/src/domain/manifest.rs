//! Hook manifest exported by a hook repository.

use serde::{Deserialize, Serialize};

use super::config::HookEntry;

/// Manifest file name at the root of every hook repository.
pub const MANIFEST_FILE: &str = ".pre-commit-hooks.yaml";

fn default_types() -> Vec<String> {
    vec!["file".to_string()]
}

const fn default_true() -> bool {
    true
}

/// One hook exported by a repository manifest.
///
/// Manifests in the wild carry keys this runner ignores (stages, minimum
/// versions); unknown keys are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHook {
    pub id: String,
    pub name: String,
    /// Command line to run, program first.
    pub entry: String,
    pub language: String,

    /// Include pattern; `None` matches every file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Exclude pattern; `None` excludes nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(default = "default_types")]
    pub types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types_or: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,

    #[serde(default = "default_true")]
    pub pass_filenames: bool,

    #[serde(default)]
    pub always_run: bool,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ManifestHook {
    /// Create a manifest hook with default selection settings.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entry: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entry: entry.into(),
            language: language.into(),
            files: None,
            exclude: None,
            types: default_types(),
            types_or: Vec::new(),
            exclude_types: Vec::new(),
            args: Vec::new(),
            additional_dependencies: Vec::new(),
            pass_filenames: true,
            always_run: false,
            verbose: false,
            language_version: None,
            description: None,
        }
    }

    /// Build the manifest record for a hook defined inline in a local repo.
    ///
    /// Returns the names of the missing required fields on failure.
    pub fn from_local_entry(entry: &HookEntry) -> Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        if entry.name.as_deref().is_none_or(str::is_empty) {
            missing.push("name");
        }
        if entry.entry.as_deref().is_none_or(str::is_empty) {
            missing.push("entry");
        }
        if entry.language.as_deref().is_none_or(str::is_empty) {
            missing.push("language");
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        // Overrides are applied later by ResolvedHook::merge, so only the
        // required fields are copied here.
        Ok(Self::new(
            entry.id.clone(),
            entry.name.clone().unwrap_or_default(),
            entry.entry.clone().unwrap_or_default(),
            entry.language.clone().unwrap_or_default(),
        ))
    }

    /// Set the default arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the type constraint.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }
}
