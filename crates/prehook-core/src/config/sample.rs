//! Starter configuration.

const SAMPLE: &str = "\
# See the hook repositories' own manifests for the available hook ids.
fail_fast: false
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: check-yaml
      - id: check-added-large-files
";

/// A starter configuration document.
pub const fn sample_config() -> &'static str {
    SAMPLE
}
