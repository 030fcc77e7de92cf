//! Structural validation of configs and manifests.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_yaml::Value;

use super::ConfigError;
use crate::domain::{HookConfig, ManifestHook};
use crate::selection::compile_pattern;

/// Non-fatal findings from validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Whether validation produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

fn check_pattern(errors: &mut Vec<String>, location: &str, key: &str, pattern: Option<&str>) {
    if let Some(pattern) = pattern {
        if let Err(e) = compile_pattern(pattern) {
            errors.push(format!("{location}: `{key}` {e}"));
        }
    }
}

fn warn_unknown_keys(report: &mut ValidationReport, location: &str, extra: &BTreeMap<String, Value>) {
    for key in extra.keys() {
        report.warn(format!("{location}: unknown key `{key}` is ignored"));
    }
}

/// Validate a parsed configuration.
///
/// Errors: empty hook ids, empty revisions on remote repos, empty hook lists,
/// incomplete local hooks and patterns that do not compile. Duplicate ids and
/// unknown keys are reported as warnings.
pub fn validate_config(config: &HookConfig) -> Result<ValidationReport, ConfigError> {
    let mut errors = Vec::new();
    let mut report = ValidationReport::default();

    if config.repos.is_empty() {
        report.warn("no repositories declared".to_string());
    }
    warn_unknown_keys(&mut report, "config", &config.extra);
    check_pattern(&mut errors, "config", "files", config.files.as_deref());
    check_pattern(&mut errors, "config", "exclude", config.exclude.as_deref());

    for (i, repo) in config.repos.iter().enumerate() {
        let location = format!("repos[{i}]");
        warn_unknown_keys(&mut report, &location, &repo.extra);

        if repo.repo.trim().is_empty() {
            errors.push(format!("{location}: `repo` must not be empty"));
        }
        if repo.is_local() {
            if repo.rev.is_some() {
                report.warn(format!("{location}: `rev` is ignored for local repositories"));
            }
        } else if repo.rev_or_empty().trim().is_empty() {
            errors.push(format!("{location} ({}): `rev` must not be empty", repo.repo));
        }
        if repo.hooks.is_empty() {
            errors.push(format!("{location} ({}): `hooks` must not be empty", repo.repo));
        }

        let mut seen = HashSet::new();
        for (j, hook) in repo.hooks.iter().enumerate() {
            let location = format!("repos[{i}].hooks[{j}]");
            warn_unknown_keys(&mut report, &location, &hook.extra);

            if hook.id.trim().is_empty() {
                errors.push(format!("{location}: `id` must not be empty"));
                continue;
            }
            if !seen.insert(hook.id.as_str()) {
                report.warn(format!(
                    "{location}: hook `{}` is declared more than once in {}",
                    hook.id, repo.repo
                ));
            }
            if repo.is_local() {
                if let Err(missing) = ManifestHook::from_local_entry(hook) {
                    errors.push(format!(
                        "{location} ({}): local hooks require {}",
                        hook.id,
                        missing.join(", ")
                    ));
                }
            }
            check_pattern(&mut errors, &location, "files", hook.files.as_deref());
            check_pattern(&mut errors, &location, "exclude", hook.exclude.as_deref());
        }
    }

    if errors.is_empty() {
        Ok(report)
    } else {
        Err(ConfigError::Invalid(errors))
    }
}

/// Validate a repository manifest.
///
/// Manifest ids must be unique since config entries look hooks up by id.
pub fn validate_manifest(hooks: &[ManifestHook]) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    if hooks.is_empty() {
        errors.push("manifest declares no hooks".to_string());
    }

    let mut seen = HashSet::new();
    for (i, hook) in hooks.iter().enumerate() {
        let location = format!("hooks[{i}]");
        for (key, value) in [
            ("id", &hook.id),
            ("name", &hook.name),
            ("entry", &hook.entry),
            ("language", &hook.language),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{location}: `{key}` must not be empty"));
            }
        }
        if !hook.id.is_empty() && !seen.insert(hook.id.as_str()) {
            errors.push(format!("{location}: duplicate hook id `{}`", hook.id));
        }
        check_pattern(&mut errors, &location, "files", hook.files.as_deref());
        check_pattern(&mut errors, &location, "exclude", hook.exclude.as_deref());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HookEntry, RepoConfig};

    fn config_with(repo: RepoConfig) -> HookConfig {
        HookConfig {
            repos: vec![repo],
            ..Default::default()
        }
    }

    fn errors_of(config: &HookConfig) -> Vec<String> {
        match validate_config(config) {
            Err(ConfigError::Invalid(errors)) => errors,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_config_is_clean() {
        let config = config_with(RepoConfig::remote("r", "v1").with_hook(HookEntry::new("a")));
        let report = validate_config(&config).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_id_is_error() {
        let config = config_with(RepoConfig::remote("r", "v1").with_hook(HookEntry::new("  ")));
        let errors = errors_of(&config);
        assert!(errors[0].contains("`id` must not be empty"));
    }

    #[test]
    fn test_empty_rev_is_error() {
        let config = config_with(RepoConfig::remote("r", "").with_hook(HookEntry::new("a")));
        assert!(errors_of(&config)[0].contains("`rev`"));

        let mut missing = RepoConfig::remote("r", "v1").with_hook(HookEntry::new("a"));
        missing.rev = None;
        assert!(errors_of(&config_with(missing))[0].contains("`rev`"));
    }

    #[test]
    fn test_empty_hook_list_is_error() {
        let config = config_with(RepoConfig::remote("r", "v1"));
        assert!(errors_of(&config)[0].contains("`hooks` must not be empty"));
    }

    #[test]
    fn test_duplicate_ids_are_warnings() {
        let config = config_with(
            RepoConfig::remote("r", "v1")
                .with_hook(HookEntry::new("a"))
                .with_hook(HookEntry::new("a")),
        );
        let report = validate_config(&config).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("more than once"));
    }

    #[test]
    fn test_local_repo_needs_no_rev_but_full_hooks() {
        let ok = config_with(
            RepoConfig::local().with_hook(HookEntry::new("fmt").with_inline("fmt", "cargo fmt", "system")),
        );
        assert!(validate_config(&ok).is_ok());

        let incomplete = config_with(RepoConfig::local().with_hook(HookEntry::new("fmt")));
        assert!(errors_of(&incomplete)[0].contains("local hooks require name, entry, language"));
    }

    #[test]
    fn test_bad_pattern_is_error() {
        let mut entry = HookEntry::new("a");
        entry.files = Some("(unclosed".to_string());
        let config = config_with(RepoConfig::remote("r", "v1").with_hook(entry));
        assert!(errors_of(&config)[0].contains("`files`"));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let config = HookConfig {
            repos: vec![
                RepoConfig::remote("r", ""),
                RepoConfig::remote("s", "v1").with_hook(HookEntry::new("")),
            ],
            ..Default::default()
        };
        assert_eq!(errors_of(&config).len(), 3);
    }

    #[test]
    fn test_manifest_validation() {
        let good = vec![ManifestHook::new("a", "A", "a", "system")];
        assert!(validate_manifest(&good).is_ok());

        let dup = vec![
            ManifestHook::new("a", "A", "a", "system"),
            ManifestHook::new("a", "A2", "a", "system"),
        ];
        assert!(matches!(validate_manifest(&dup), Err(ConfigError::Invalid(e)) if e[0].contains("duplicate")));

        assert!(validate_manifest(&[]).is_err());
    }
}
