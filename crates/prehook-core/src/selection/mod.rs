//! File selection for hooks.
//!
//! Patterns are unanchored regex searches over `/`-separated relative paths.
//! Type constraints are matched against the tags from [`tags_for_path`], or
//! [`tags_for_file`] when the filter knows the project root.

mod tags;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::ConfigError;
use crate::domain::{HookConfig, ResolvedHook};

pub use tags::{tags_for_file, tags_for_path};

/// Compile a `files`/`exclude` pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn compile_optional(pattern: Option<&str>) -> Result<Option<Regex>, ConfigError> {
    match pattern {
        Some(p) if !p.is_empty() => compile_pattern(p).map(Some),
        _ => Ok(None),
    }
}

/// Normalize a path for pattern matching.
fn match_key(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    match text.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Compiled include/exclude patterns plus type constraints.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
    types: Vec<String>,
    types_or: Vec<String>,
    exclude_types: Vec<String>,
    root: Option<PathBuf>,
}

impl FileFilter {
    /// A filter with patterns only. Empty patterns are ignored.
    pub fn new(files: Option<&str>, exclude: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            include: compile_optional(files)?,
            exclude: compile_optional(exclude)?,
            ..Self::default()
        })
    }

    /// The global filter from the config's top-level `files`/`exclude`.
    pub fn for_config(config: &HookConfig) -> Result<Self, ConfigError> {
        Self::new(config.files.as_deref(), config.exclude.as_deref())
    }

    /// The filter for one hook.
    pub fn for_hook(hook: &ResolvedHook) -> Result<Self, ConfigError> {
        let mut filter = Self::new(hook.files.as_deref(), hook.exclude.as_deref())?;
        filter.types.clone_from(&hook.types);
        filter.types_or.clone_from(&hook.types_or);
        filter.exclude_types.clone_from(&hook.exclude_types);
        Ok(filter)
    }

    /// Resolve paths against `root` so extensionless files can be sniffed.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn matches_types(&self, tags: &BTreeSet<&'static str>) -> bool {
        let has = |t: &String| tags.contains(t.as_str());
        self.types.iter().all(has)
            && (self.types_or.is_empty() || self.types_or.iter().any(has))
            && !self.exclude_types.iter().any(has)
    }

    /// Whether `path` passes this filter.
    pub fn matches(&self, path: &Path) -> bool {
        let key = match_key(path);
        if self.include.as_ref().is_some_and(|re| !re.is_match(&key)) {
            return false;
        }
        if self.exclude.as_ref().is_some_and(|re| re.is_match(&key)) {
            return false;
        }
        if self.types.is_empty() && self.types_or.is_empty() && self.exclude_types.is_empty() {
            return true;
        }
        let tags = match &self.root {
            Some(root) => tags_for_file(root, path),
            None => tags_for_path(path),
        };
        self.matches_types(&tags)
    }

    /// Paths that pass this filter, in input order.
    pub fn select(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
