//! Run results.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a single hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HookOutcome {
    /// Exited zero and left its files untouched.
    Passed,
    /// Exited non-zero, or exited zero after modifying files.
    Failed { exit_code: Option<i32> },
    /// Not run (no matching files).
    Skipped { reason: String },
    /// The executor could not run the hook at all.
    Errored { message: String },
}

impl HookOutcome {
    /// Whether this outcome counts as a failure for the run.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Errored { .. })
    }

    /// Short status label for terminal output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed { .. } => "Failed",
            Self::Skipped { .. } => "Skipped",
            Self::Errored { .. } => "Error",
        }
    }
}

/// Result of one hook within a run.
#[derive(Debug, Clone, Serialize)]
pub struct HookResult {
    pub id: String,
    pub name: String,
    pub outcome: HookOutcome,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Number of files passed to (or selected for) the hook.
    pub files_checked: usize,
    /// Files whose contents changed while the hook ran.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_modified: Vec<PathBuf>,
    /// Combined stdout/stderr of every invocation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub output: String,
}

impl HookResult {
    /// A result for a hook that did not run.
    pub fn skipped(id: impl Into<String>, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            outcome: HookOutcome::Skipped {
                reason: reason.into(),
            },
            duration: Duration::ZERO,
            files_checked: 0,
            files_modified: Vec::new(),
            output: String::new(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Ordered results of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub results: Vec<HookResult>,
    /// Set when the short-circuit flag stopped the sequence.
    pub stopped_early: bool,
}

impl RunReport {
    /// Create an empty report.
    pub const fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            results: Vec::new(),
            stopped_early: false,
        }
    }

    /// Whether every hook that ran passed (skips count as passing).
    pub fn passed(&self) -> bool {
        !self.results.iter().any(|r| r.outcome.is_failure())
    }

    /// Results that count as failures.
    pub fn failures(&self) -> impl Iterator<Item = &HookResult> {
        self.results.iter().filter(|r| r.outcome.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: HookOutcome) -> HookResult {
        HookResult {
            id: "h".to_string(),
            name: "h".to_string(),
            outcome,
            duration: Duration::from_millis(12),
            files_checked: 1,
            files_modified: Vec::new(),
            output: String::new(),
        }
    }

    #[test]
    fn test_failure_classification() {
        assert!(!HookOutcome::Passed.is_failure());
        assert!(
            !HookOutcome::Skipped {
                reason: "no files".to_string()
            }
            .is_failure()
        );
        assert!(HookOutcome::Failed { exit_code: Some(1) }.is_failure());
        assert!(
            HookOutcome::Errored {
                message: "boom".to_string()
            }
            .is_failure()
        );
    }

    #[test]
    fn test_report_passed_and_failures() {
        let mut report = RunReport::new(Utc::now());
        report.results.push(result(HookOutcome::Passed));
        report
            .results
            .push(HookResult::skipped("s", "s", "no files to check"));
        assert!(report.passed());

        report
            .results
            .push(result(HookOutcome::Failed { exit_code: Some(2) }));
        assert!(!report.passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_result_serializes_status_tag() {
        let json = serde_json::to_value(result(HookOutcome::Failed { exit_code: Some(3) })).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["exit_code"], 3);
        assert_eq!(json["duration_ms"], 12);
        assert!(json.get("output").is_none());
    }
}
