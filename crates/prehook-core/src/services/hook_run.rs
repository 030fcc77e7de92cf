//! Hook run service - resolves declared hooks and runs them in order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::digest::{changed_files, digest_files};
use crate::config::{ConfigError, validate_config};
use crate::domain::{
    HookConfig, HookEntry, HookOutcome, HookResult, ManifestHook, ResolvedHook, RunReport,
};
use crate::ports::{
    CoreError, HookExecutor, HookInvocation, RepoResolver, ResolveError, RunEvent, RunEventSink,
};
use crate::selection::FileFilter;
use crate::settings::{RunnerSettings, validate_settings};

/// Skip reason for hooks whose filters matched nothing.
pub const NO_FILES_REASON: &str = "no files to check";

/// Caller-controlled options for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Project root; hooks run here and file paths are relative to it.
    pub work_dir: PathBuf,
    /// Working set of files, relative to `work_dir`.
    pub files: Vec<PathBuf>,
    /// Run only hooks matching these ids or aliases (empty = all).
    pub hook_ids: Vec<String>,
    /// Force short-circuiting even when the config does not set it.
    pub fail_fast: bool,
}

impl RunOptions {
    /// Create options for a working set of files.
    pub fn new(work_dir: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            files,
            ..Self::default()
        }
    }

    /// Restrict the run to the given hook ids or aliases.
    #[must_use]
    pub fn with_hook_ids(mut self, ids: Vec<String>) -> Self {
        self.hook_ids = ids;
        self
    }

    /// Force short-circuiting.
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// Service that applies the run policy over the resolver and executor ports.
///
/// Policy:
/// - malformed declarations and unresolved references abort before any hook runs
/// - hooks run in declared order
/// - with the short-circuit flag, the first failure stops the sequence;
///   otherwise every hook runs and every failure is reported
pub struct HookRunService {
    resolver: Arc<dyn RepoResolver>,
    executor: Arc<dyn HookExecutor>,
    settings: RunnerSettings,
}

impl HookRunService {
    /// Create a new run service.
    pub fn new(
        resolver: Arc<dyn RepoResolver>,
        executor: Arc<dyn HookExecutor>,
        settings: RunnerSettings,
    ) -> Self {
        Self {
            resolver,
            executor,
            settings,
        }
    }

    /// Access the resolver (used by cache maintenance commands).
    pub fn resolver(&self) -> &Arc<dyn RepoResolver> {
        &self.resolver
    }

    /// Resolve every selected hook without running anything.
    ///
    /// Repositories are resolved in declared order; local repositories are
    /// built from their inline entries. Repositories with no selected entry
    /// are not resolved.
    pub async fn plan(
        &self,
        config: &HookConfig,
        options: &RunOptions,
    ) -> Result<Vec<ResolvedHook>, CoreError> {
        let selected = |entry: &HookEntry| {
            options.hook_ids.is_empty() || options.hook_ids.iter().any(|s| entry.matches_selector(s))
        };

        for selector in &options.hook_ids {
            let known = config
                .repos
                .iter()
                .flat_map(|r| &r.hooks)
                .any(|h| h.matches_selector(selector));
            if !known {
                return Err(CoreError::Validation(format!(
                    "No hook with id or alias `{selector}`"
                )));
            }
        }

        let mut planned = Vec::with_capacity(config.hook_count());
        for repo in &config.repos {
            let entries: Vec<_> = repo.hooks.iter().filter(|&e| selected(e)).collect();
            if entries.is_empty() {
                continue;
            }

            if repo.is_local() {
                for entry in entries {
                    let manifest = ManifestHook::from_local_entry(entry).map_err(|missing| {
                        ConfigError::Invalid(vec![format!(
                            "local hook `{}` requires {}",
                            entry.id,
                            missing.join(", ")
                        )])
                    })?;
                    planned.push(ResolvedHook::merge(config, repo, None, &manifest, entry));
                }
                continue;
            }

            debug!(repo = %repo.repo, rev = %repo.rev_or_empty(), "Resolving repository");
            let resolved = self.resolver.resolve(repo).await?;
            for entry in entries {
                let manifest = resolved
                    .hook(&entry.id)
                    .ok_or_else(|| ResolveError::HookNotFound {
                        repo: repo.repo.clone(),
                        rev: repo.rev_or_empty().to_string(),
                        id: entry.id.clone(),
                    })?;
                planned.push(ResolvedHook::merge(
                    config,
                    repo,
                    Some(&resolved.path),
                    manifest,
                    entry,
                ));
            }
        }

        Ok(planned)
    }

    /// Run the configured hooks against `options.files`.
    pub async fn run(
        &self,
        config: &HookConfig,
        options: &RunOptions,
        events: &dyn RunEventSink,
    ) -> Result<RunReport, CoreError> {
        validate_settings(&self.settings)?;
        let validation = validate_config(config)?;
        for warning in &validation.warnings {
            warn!("{warning}");
        }

        let hooks = self.plan(config, options).await?;
        let candidates = FileFilter::for_config(config)?.select(&options.files);
        let fail_fast = config.fail_fast || options.fail_fast;

        info!(
            hooks = hooks.len(),
            files = candidates.len(),
            fail_fast,
            "Running hooks"
        );

        let mut report = RunReport::new(Utc::now());
        for (index, hook) in hooks.iter().enumerate() {
            events.emit(RunEvent::HookStarted {
                id: hook.id.clone(),
                name: hook.name.clone(),
            });

            let result = self.run_hook(hook, &candidates, &options.work_dir).await?;
            let failed = result.outcome.is_failure();
            events.emit(RunEvent::HookFinished(result.clone()));
            report.results.push(result);

            if failed && fail_fast {
                let remaining = hooks.len() - index - 1;
                if remaining > 0 {
                    info!(hook = %hook.id, remaining, "Stopping after first failure");
                    report.stopped_early = true;
                    events.emit(RunEvent::StoppedEarly {
                        id: hook.id.clone(),
                        remaining,
                    });
                }
                break;
            }
        }

        Ok(report)
    }

    /// Split the selected files into invocation batches.
    fn batches(&self, hook: &ResolvedHook, files: &[PathBuf]) -> Vec<Vec<PathBuf>> {
        if !hook.pass_filenames || files.is_empty() {
            return vec![Vec::new()];
        }
        let size = self.settings.effective_max_files_per_batch().max(1);
        files.chunks(size).map(<[PathBuf]>::to_vec).collect()
    }

    async fn run_hook(
        &self,
        hook: &ResolvedHook,
        candidates: &[PathBuf],
        work_dir: &Path,
    ) -> Result<HookResult, CoreError> {
        let files = FileFilter::for_hook(hook)?
            .with_root(work_dir)
            .select(candidates);
        if files.is_empty() && !hook.always_run {
            debug!(hook = %hook.id, "No files to check");
            return Ok(HookResult::skipped(&hook.id, &hook.name, NO_FILES_REASON));
        }

        let before = digest_files(work_dir, &files).await;
        let started = Instant::now();
        let mut output = String::new();
        let mut first_failure: Option<Option<i32>> = None;

        for batch in self.batches(hook, &files) {
            let invocation = HookInvocation::new(hook, batch, work_dir);
            debug!(
                hook = %hook.id,
                files = invocation.files.len(),
                "Invoking hook"
            );

            match self.executor.execute(&invocation).await {
                Ok(exec) => {
                    output.push_str(&exec.output);
                    if !exec.success() && first_failure.is_none() {
                        first_failure = Some(exec.exit_code);
                    }
                }
                Err(e) => {
                    warn!(hook = %hook.id, error = %e, "Hook could not be executed");
                    return Ok(HookResult {
                        id: hook.id.clone(),
                        name: hook.name.clone(),
                        outcome: HookOutcome::Errored {
                            message: e.to_string(),
                        },
                        duration: started.elapsed(),
                        files_checked: files.len(),
                        files_modified: Vec::new(),
                        output,
                    });
                }
            }
        }

        let duration = started.elapsed();
        let after = digest_files(work_dir, &files).await;
        let files_modified = changed_files(&files, &before, &after);

        let outcome = match first_failure {
            Some(exit_code) => HookOutcome::Failed { exit_code },
            None if !files_modified.is_empty() => HookOutcome::Failed { exit_code: Some(0) },
            None => HookOutcome::Passed,
        };

        debug!(
            hook = %hook.id,
            status = outcome.label(),
            modified = files_modified.len(),
            elapsed_ms = duration.as_millis(),
            "Hook finished"
        );

        Ok(HookResult {
            id: hook.id.clone(),
            name: hook.name.clone(),
            outcome,
            duration,
            files_checked: files.len(),
            files_modified,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepoConfig;
    use crate::ports::{ExecError, ExecOutput, ResolvedRepo};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct MockResolver {
        manifests: HashMap<String, Vec<ManifestHook>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockResolver {
        fn new(manifests: &[(&str, Vec<ManifestHook>)]) -> Self {
            Self {
                manifests: manifests
                    .iter()
                    .map(|(repo, hooks)| ((*repo).to_string(), hooks.clone()))
                    .collect(),
                calls: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl RepoResolver for MockResolver {
        async fn resolve(&self, repo: &RepoConfig) -> Result<ResolvedRepo, ResolveError> {
            self.calls.lock().unwrap().push(repo.repo.clone());
            self.manifests
                .get(&repo.repo)
                .map(|manifest| ResolvedRepo {
                    path: PathBuf::from("/cache").join(&repo.repo),
                    manifest: manifest.clone(),
                })
                .ok_or_else(|| ResolveError::RepositoryNotFound {
                    repo: repo.repo.clone(),
                    reason: "unknown".to_string(),
                })
        }

        async fn clean(&self) -> Result<(), ResolveError> {
            Ok(())
        }
    }

    /// Executor scripted by hook id: exit code, error, or file rewrite.
    #[derive(Default)]
    struct MockExecutor {
        exit_codes: HashMap<String, i32>,
        errors: Vec<String>,
        rewriters: Vec<String>,
        invocations: Mutex<Vec<HookInvocation>>,
    }

    impl MockExecutor {
        fn invoked_ids(&self) -> Vec<String> {
            self.invocations
                .lock()
                .unwrap()
                .iter()
                .map(|i| i.hook_id.clone())
                .collect()
        }
    }

    #[async_trait]
    impl HookExecutor for MockExecutor {
        async fn execute(&self, invocation: &HookInvocation) -> Result<ExecOutput, ExecError> {
            self.invocations.lock().unwrap().push(invocation.clone());
            if self.errors.contains(&invocation.hook_id) {
                return Err(ExecError::NotFound(invocation.entry.clone()));
            }
            if self.rewriters.contains(&invocation.hook_id) {
                for file in &invocation.files {
                    fs::write(invocation.work_dir.join(file), "rewritten\n").unwrap();
                }
            }
            let code = self.exit_codes.get(&invocation.hook_id).copied().unwrap_or(0);
            Ok(ExecOutput::new(Some(code), format!("{} ran\n", invocation.hook_id)))
        }
    }

    #[derive(Default)]
    struct RecordingEvents {
        events: Mutex<Vec<String>>,
    }

    impl RunEventSink for RecordingEvents {
        fn emit(&self, event: RunEvent) {
            let label = match event {
                RunEvent::HookStarted { id, .. } => format!("start:{id}"),
                RunEvent::HookFinished(result) => {
                    format!("finish:{}:{}", result.id, result.outcome.label())
                }
                RunEvent::StoppedEarly { id, remaining } => format!("stop:{id}:{remaining}"),
            };
            self.events.lock().unwrap().push(label);
        }
    }

    fn manifest(ids: &[&str]) -> Vec<ManifestHook> {
        ids.iter()
            .map(|id| ManifestHook::new(*id, *id, *id, "system"))
            .collect()
    }

    fn project(files: &[&str]) -> (TempDir, Vec<PathBuf>) {
        let temp = TempDir::new().unwrap();
        for file in files {
            let path = temp.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "original\n").unwrap();
        }
        let paths = files.iter().map(PathBuf::from).collect();
        (temp, paths)
    }

    fn three_hook_config(fail_fast: bool) -> HookConfig {
        HookConfig {
            fail_fast,
            repos: vec![
                RepoConfig::remote("hooks", "v1")
                    .with_hook(HookEntry::new("first"))
                    .with_hook(HookEntry::new("second")),
                RepoConfig::remote("more", "v2").with_hook(HookEntry::new("third")),
            ],
            ..Default::default()
        }
    }

    fn service(executor: Arc<MockExecutor>, settings: RunnerSettings) -> (HookRunService, Arc<MockResolver>) {
        let resolver = Arc::new(MockResolver::new(&[
            ("hooks", manifest(&["first", "second"])),
            ("more", manifest(&["third"])),
        ]));
        let service = HookRunService::new(resolver.clone(), executor, settings);
        (service, resolver)
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_failure() {
        let executor = Arc::new(MockExecutor {
            exit_codes: HashMap::from([("first".to_string(), 1)]),
            ..Default::default()
        });
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);
        let events = RecordingEvents::default();

        let report = service
            .run(
                &three_hook_config(true),
                &RunOptions::new(dir.path(), files),
                &events,
            )
            .await
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert!(report.stopped_early);
        assert!(!report.passed());
        assert_eq!(executor.invoked_ids(), vec!["first"]);
        assert_eq!(
            *events.events.lock().unwrap(),
            vec!["start:first", "finish:first:Failed", "stop:first:2"]
        );
    }

    #[tokio::test]
    async fn test_without_fail_fast_all_failures_reported() {
        let executor = Arc::new(MockExecutor {
            exit_codes: HashMap::from([("first".to_string(), 1), ("third".to_string(), 3)]),
            ..Default::default()
        });
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);

        let report = service
            .run(
                &three_hook_config(false),
                &RunOptions::new(dir.path(), files),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();

        assert_eq!(report.results.len(), 3);
        assert!(!report.stopped_early);
        let failed: Vec<_> = report.failures().map(|r| r.id.as_str()).collect();
        assert_eq!(failed, vec!["first", "third"]);
        assert_eq!(
            report.results[2].outcome,
            HookOutcome::Failed { exit_code: Some(3) }
        );
    }

    #[tokio::test]
    async fn test_option_fail_fast_overrides_config() {
        let executor = Arc::new(MockExecutor {
            exit_codes: HashMap::from([("second".to_string(), 1)]),
            ..Default::default()
        });
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);

        let report = service
            .run(
                &three_hook_config(false),
                &RunOptions::new(dir.path(), files).with_fail_fast(true),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();

        assert_eq!(executor.invoked_ids(), vec!["first", "second"]);
        assert!(report.stopped_early);
    }

    #[tokio::test]
    async fn test_last_hook_failing_is_not_stopped_early() {
        let executor = Arc::new(MockExecutor {
            exit_codes: HashMap::from([("third".to_string(), 1)]),
            ..Default::default()
        });
        let (service, _) = service(executor, RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);

        let report = service
            .run(
                &three_hook_config(true),
                &RunOptions::new(dir.path(), files),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();
        assert_eq!(report.results.len(), 3);
        assert!(!report.stopped_early);
    }

    #[tokio::test]
    async fn test_unknown_hook_id_aborts_before_running() {
        let executor = Arc::new(MockExecutor::default());
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let mut config = three_hook_config(false);
        config.repos[1].hooks.push(HookEntry::new("not-exported"));
        let (dir, files) = project(&["a.txt"]);

        let err = service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Resolve(ResolveError::HookNotFound { ref id, .. }) if id == "not-exported"
        ));
        assert!(executor.invoked_ids().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_repository_aborts() {
        let executor = Arc::new(MockExecutor::default());
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let mut config = three_hook_config(false);
        config
            .repos
            .push(RepoConfig::remote("missing", "v0").with_hook(HookEntry::new("x")));
        let (dir, files) = project(&["a.txt"]);

        let err = service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Resolve(ResolveError::RepositoryNotFound { .. })
        ));
        assert!(executor.invoked_ids().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_config_aborts_before_resolution() {
        let executor = Arc::new(MockExecutor::default());
        let (service, resolver) = service(executor, RunnerSettings::with_defaults());
        let mut config = three_hook_config(false);
        config.repos[0].rev = Some(String::new());

        let err = service
            .run(&config, &RunOptions::default(), &crate::ports::NoopRunEvents)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::Invalid(_))));
        assert!(resolver.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_matching_files_skips_unless_always_run() {
        let executor = Arc::new(MockExecutor::default());
        let resolver = Arc::new(MockResolver::new(&[(
            "hooks",
            vec![
                ManifestHook::new("py", "py", "py", "system").with_types(["python"]),
                ManifestHook {
                    always_run: true,
                    ..ManifestHook::new("always", "always", "always", "system").with_types(["python"])
                },
            ],
        )]));
        let service = HookRunService::new(resolver, executor.clone(), RunnerSettings::with_defaults());
        let config = HookConfig {
            repos: vec![
                RepoConfig::remote("hooks", "v1")
                    .with_hook(HookEntry::new("py"))
                    .with_hook(HookEntry::new("always")),
            ],
            ..Default::default()
        };
        let (dir, files) = project(&["README.md"]);

        let report = service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap();

        assert_eq!(
            report.results[0].outcome,
            HookOutcome::Skipped {
                reason: NO_FILES_REASON.to_string()
            }
        );
        assert_eq!(report.results[1].outcome, HookOutcome::Passed);
        assert!(report.passed());

        let invocations = executor.invocations.lock().unwrap();
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].files.is_empty());
    }

    #[tokio::test]
    async fn test_hook_that_modifies_files_fails() {
        let executor = Arc::new(MockExecutor {
            rewriters: vec!["second".to_string()],
            ..Default::default()
        });
        let (service, _) = service(executor, RunnerSettings::with_defaults());
        let (dir, files) = project(&["src/a.py", "b.py"]);

        let report = service
            .run(
                &three_hook_config(false),
                &RunOptions::new(dir.path(), files),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();

        assert_eq!(report.results[0].outcome, HookOutcome::Passed);
        assert_eq!(
            report.results[1].outcome,
            HookOutcome::Failed { exit_code: Some(0) }
        );
        assert_eq!(
            report.results[1].files_modified,
            vec![PathBuf::from("src/a.py"), PathBuf::from("b.py")]
        );
        // Later hooks see the rewritten content and leave it alone.
        assert_eq!(report.results[2].outcome, HookOutcome::Passed);
    }

    #[tokio::test]
    async fn test_filenames_are_batched() {
        let executor = Arc::new(MockExecutor::default());
        let settings = RunnerSettings {
            max_files_per_batch: Some(2),
            ..RunnerSettings::with_defaults()
        };
        let (service, _) = service(executor.clone(), settings);
        let config = HookConfig {
            repos: vec![RepoConfig::remote("more", "v2").with_hook(HookEntry::new("third"))],
            ..Default::default()
        };
        let (dir, files) = project(&["1", "2", "3", "4", "5"]);

        let report = service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap();

        let sizes: Vec<usize> = executor
            .invocations
            .lock()
            .unwrap()
            .iter()
            .map(|i| i.files.len())
            .collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(report.results[0].files_checked, 5);
        assert_eq!(report.results[0].output, "third ran\n".repeat(3));
    }

    #[tokio::test]
    async fn test_pass_filenames_false_runs_once_without_files() {
        let executor = Arc::new(MockExecutor::default());
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let mut entry = HookEntry::new("third");
        entry.pass_filenames = Some(false);
        let config = HookConfig {
            repos: vec![RepoConfig::remote("more", "v2").with_hook(entry)],
            ..Default::default()
        };
        let (dir, files) = project(&["1", "2", "3"]);

        service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap();

        let invocations = executor.invocations.lock().unwrap();
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].files.is_empty());
    }

    #[tokio::test]
    async fn test_executor_error_is_errored_outcome() {
        let executor = Arc::new(MockExecutor {
            errors: vec!["first".to_string()],
            ..Default::default()
        });
        let (service, _) = service(executor, RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);

        let report = service
            .run(
                &three_hook_config(false),
                &RunOptions::new(dir.path(), files),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();

        assert!(matches!(
            report.results[0].outcome,
            HookOutcome::Errored { ref message } if message.contains("Executable not found")
        ));
        assert_eq!(report.results.len(), 3);
        assert!(!report.passed());
    }

    #[tokio::test]
    async fn test_hook_selector_filters_and_skips_unused_repos() {
        let executor = Arc::new(MockExecutor::default());
        let (service, resolver) = service(executor.clone(), RunnerSettings::with_defaults());
        let (dir, files) = project(&["a.txt"]);

        service
            .run(
                &three_hook_config(false),
                &RunOptions::new(dir.path(), files).with_hook_ids(vec!["third".to_string()]),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap();

        assert_eq!(executor.invoked_ids(), vec!["third"]);
        assert_eq!(*resolver.calls.lock().unwrap(), vec!["more"]);
    }

    #[tokio::test]
    async fn test_unknown_selector_is_validation_error() {
        let executor = Arc::new(MockExecutor::default());
        let (service, _) = service(executor, RunnerSettings::with_defaults());

        let err = service
            .plan(
                &three_hook_config(false),
                &RunOptions::default().with_hook_ids(vec!["nope".to_string()]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("nope")));
    }

    #[tokio::test]
    async fn test_local_hooks_bypass_resolver() {
        let executor = Arc::new(MockExecutor::default());
        let (service, resolver) = service(executor.clone(), RunnerSettings::with_defaults());
        let config = HookConfig {
            repos: vec![RepoConfig::local().with_hook(
                HookEntry::new("fmt").with_inline("Format", "cargo fmt --check", "system"),
            )],
            ..Default::default()
        };
        let (dir, files) = project(&["src/main.rs"]);

        let report = service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap();

        assert!(report.passed());
        assert!(resolver.calls.lock().unwrap().is_empty());
        let invocations = executor.invocations.lock().unwrap();
        assert_eq!(invocations[0].entry, "cargo fmt --check");
        assert!(invocations[0].repo_path.is_none());
    }

    #[tokio::test]
    async fn test_global_exclude_applies_before_hook_filters() {
        let executor = Arc::new(MockExecutor::default());
        let (service, _) = service(executor.clone(), RunnerSettings::with_defaults());
        let config = HookConfig {
            exclude: Some("^vendor/".to_string()),
            repos: vec![RepoConfig::remote("more", "v2").with_hook(HookEntry::new("third"))],
            ..Default::default()
        };
        let (dir, files) = project(&["vendor/lib.py", "app.py"]);

        service
            .run(&config, &RunOptions::new(dir.path(), files), &crate::ports::NoopRunEvents)
            .await
            .unwrap();

        let invocations = executor.invocations.lock().unwrap();
        assert_eq!(invocations[0].files, vec![PathBuf::from("app.py")]);
    }

    #[tokio::test]
    async fn test_invalid_settings_rejected() {
        let executor = Arc::new(MockExecutor::default());
        let settings = RunnerSettings {
            hook_timeout_secs: Some(0),
            ..Default::default()
        };
        let (service, _) = service(executor, settings);

        let err = service
            .run(
                &three_hook_config(false),
                &RunOptions::default(),
                &crate::ports::NoopRunEvents,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Settings(_)));
    }
}
