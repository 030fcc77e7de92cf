//! A hook ready to run: manifest defaults with config overrides applied.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::config::{HookConfig, HookEntry, RepoConfig};
use super::manifest::ManifestHook;

/// Language version used when neither the entry nor the config pins one.
pub const DEFAULT_LANGUAGE_VERSION: &str = "default";

/// Fully merged hook definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHook {
    /// Repository reference the hook came from.
    pub repo: String,
    pub rev: Option<String>,
    /// Checkout directory; `None` for local hooks.
    pub repo_path: Option<PathBuf>,
    pub id: String,
    pub alias: Option<String>,
    pub name: String,
    pub entry: String,
    pub language: String,
    pub language_version: String,
    pub files: Option<String>,
    pub exclude: Option<String>,
    pub types: Vec<String>,
    pub types_or: Vec<String>,
    pub exclude_types: Vec<String>,
    pub args: Vec<String>,
    pub additional_dependencies: Vec<String>,
    pub pass_filenames: bool,
    pub always_run: bool,
    pub verbose: bool,
}

impl ResolvedHook {
    /// Merge a manifest hook with the overrides of a config entry.
    ///
    /// Language version precedence: entry, then manifest, then the config's
    /// `default_language_version` for the hook's language.
    pub fn merge(
        config: &HookConfig,
        repo: &RepoConfig,
        repo_path: Option<&Path>,
        manifest: &ManifestHook,
        entry: &HookEntry,
    ) -> Self {
        let language = entry
            .language
            .clone()
            .unwrap_or_else(|| manifest.language.clone());

        let language_version = entry
            .language_version
            .clone()
            .or_else(|| manifest.language_version.clone())
            .or_else(|| config.default_version_for(&language).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_LANGUAGE_VERSION.to_string());

        let mut additional_dependencies = manifest.additional_dependencies.clone();
        additional_dependencies.extend(entry.additional_dependencies.iter().cloned());

        Self {
            repo: repo.repo.clone(),
            rev: repo.rev.clone(),
            repo_path: repo_path.map(Path::to_path_buf),
            id: manifest.id.clone(),
            alias: entry.alias.clone(),
            name: entry.name.clone().unwrap_or_else(|| manifest.name.clone()),
            entry: entry.entry.clone().unwrap_or_else(|| manifest.entry.clone()),
            language,
            language_version,
            files: entry.files.clone().or_else(|| manifest.files.clone()),
            exclude: entry.exclude.clone().or_else(|| manifest.exclude.clone()),
            types: entry.types.clone().unwrap_or_else(|| manifest.types.clone()),
            types_or: entry
                .types_or
                .clone()
                .unwrap_or_else(|| manifest.types_or.clone()),
            exclude_types: entry
                .exclude_types
                .clone()
                .unwrap_or_else(|| manifest.exclude_types.clone()),
            args: entry.args.clone().unwrap_or_else(|| manifest.args.clone()),
            additional_dependencies,
            pass_filenames: entry.pass_filenames.unwrap_or(manifest.pass_filenames),
            always_run: entry.always_run.unwrap_or(manifest.always_run),
            verbose: entry.verbose.unwrap_or(manifest.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isort_manifest() -> ManifestHook {
        ManifestHook::new("isort", "isort", "isort", "python")
            .with_types(["python"])
            .with_args(["--filter-files"])
    }

    #[test]
    fn test_merge_keeps_manifest_defaults() {
        let config = HookConfig::default();
        let repo = RepoConfig::remote("https://github.com/pycqa/isort", "5.12.0");
        let hook = ResolvedHook::merge(
            &config,
            &repo,
            Some(Path::new("/cache/isort")),
            &isort_manifest(),
            &HookEntry::new("isort"),
        );

        assert_eq!(hook.args, vec!["--filter-files"]);
        assert_eq!(hook.types, vec!["python"]);
        assert_eq!(hook.language_version, DEFAULT_LANGUAGE_VERSION);
        assert_eq!(hook.repo_path.as_deref(), Some(Path::new("/cache/isort")));
        assert_eq!(hook.rev.as_deref(), Some("5.12.0"));
    }

    #[test]
    fn test_merge_entry_args_replace_manifest_args() {
        let config = HookConfig::default();
        let repo = RepoConfig::remote("r", "v1");
        let entry = HookEntry::new("isort").with_args(["--profile", "black"]);
        let hook = ResolvedHook::merge(&config, &repo, None, &isort_manifest(), &entry);
        assert_eq!(hook.args, vec!["--profile", "black"]);

        let cleared = HookEntry::new("isort").with_args(Vec::<String>::new());
        let hook = ResolvedHook::merge(&config, &repo, None, &isort_manifest(), &cleared);
        assert!(hook.args.is_empty());
    }

    #[test]
    fn test_merge_uses_default_language_version() {
        let mut config = HookConfig::default();
        config
            .default_language_version
            .insert("python".to_string(), "python3.11".to_string());
        let repo = RepoConfig::remote("r", "v1");
        let hook = ResolvedHook::merge(
            &config,
            &repo,
            None,
            &isort_manifest(),
            &HookEntry::new("isort"),
        );
        assert_eq!(hook.language_version, "python3.11");

        let mut pinned = HookEntry::new("isort");
        pinned.language_version = Some("python3.9".to_string());
        let hook = ResolvedHook::merge(&config, &repo, None, &isort_manifest(), &pinned);
        assert_eq!(hook.language_version, "python3.9");
    }

    #[test]
    fn test_merge_appends_additional_dependencies() {
        let config = HookConfig::default();
        let repo = RepoConfig::remote("r", "v1");
        let mut manifest = isort_manifest();
        manifest.additional_dependencies = vec!["colorama".to_string()];
        let mut entry = HookEntry::new("isort");
        entry.additional_dependencies = vec!["toml".to_string()];

        let hook = ResolvedHook::merge(&config, &repo, None, &manifest, &entry);
        assert_eq!(hook.additional_dependencies, vec!["colorama", "toml"]);
    }
}
