//! Thin wrapper over the `git` executable.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, bail};
use tokio::process::Command;
use tracing::debug;

/// Run `git <args>` in `cwd`, returning trimmed stdout.
///
/// Fails with git's stderr when the command exits non-zero.
pub async fn run_git(cwd: &Path, args: &[&str]) -> anyhow::Result<String> {
    debug!(cwd = %cwd.display(), ?args, "Running git");

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .output()
        .await
        .context("failed to run git (is it installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
