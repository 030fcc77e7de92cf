//! Validate-config and validate-manifest command handlers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use prehook_core::{MANIFEST_FILE, load_config, load_manifest, validate_config, validate_manifest};

use crate::error::CliError;

fn report_ok(path: &Path, warnings: &[String]) {
    println!("{} {}", style("ok").green(), path.display());
    for warning in warnings {
        println!("  {} {warning}", style("warning:").yellow());
    }
}

fn report_err(path: &Path, err: &dyn std::fmt::Display) {
    println!("{} {}: {err}", style("invalid").red(), path.display());
}

fn finish(invalid: usize) -> Result<()> {
    if invalid > 0 {
        return Err(CliError::Config(format!("{invalid} file(s) failed validation")).into());
    }
    Ok(())
}

/// Validate configuration files.
///
/// With no paths, `default` (the project's configuration) is checked.
pub fn execute_config(paths: &[PathBuf], default: &Path) -> Result<()> {
    let paths = if paths.is_empty() {
        vec![default.to_path_buf()]
    } else {
        paths.to_vec()
    };

    let mut invalid = 0;
    for path in &paths {
        match load_config(path).and_then(|config| validate_config(&config)) {
            Ok(report) => report_ok(path, &report.warnings),
            Err(e) => {
                report_err(path, &e);
                invalid += 1;
            }
        }
    }
    finish(invalid)
}

/// Validate hook manifest files.
///
/// With no paths, `.pre-commit-hooks.yaml` in the current directory is checked.
pub fn execute_manifest(paths: &[PathBuf]) -> Result<()> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(MANIFEST_FILE)]
    } else {
        paths.to_vec()
    };

    let mut invalid = 0;
    for path in &paths {
        match load_manifest(path).and_then(|hooks| validate_manifest(&hooks)) {
            Ok(()) => report_ok(path, &[]),
            Err(e) => {
                report_err(path, &e);
                invalid += 1;
            }
        }
    }
    finish(invalid)
}
