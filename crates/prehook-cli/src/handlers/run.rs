//! Run command handler.

use std::env;

use anyhow::Result;
use prehook_core::{NoopRunEvents, RunOptions, load_config};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::{OutputFormat, RunArgs};
use crate::error::CliError;
use crate::files::{explicit_files, walk_project};
use crate::presentation::{TerminalEvents, print_summary};

/// Execute the run command.
///
/// Loads the configuration, builds the working set (every project file
/// unless `--files` names some) and runs the hooks.
///
/// # Errors
///
/// Returns an error if the configuration is malformed, a referenced
/// repository, revision or hook cannot be resolved, or any hook fails
/// (`CliError::HooksFailed`).
pub async fn execute(ctx: &CliContext, args: &RunArgs) -> Result<()> {
    let config = load_config(&ctx.config_file)?;

    let files = if args.all_files || args.files.is_empty() {
        walk_project(&ctx.project_root)?
    } else {
        explicit_files(&ctx.project_root, &env::current_dir()?, &args.files)
    };
    info!(files = files.len(), config = %ctx.config_file.display(), "Starting run");

    let options = RunOptions::new(&ctx.project_root, files)
        .with_hook_ids(args.hooks.clone())
        .with_fail_fast(args.fail_fast);

    let report = match args.format {
        OutputFormat::Text => {
            let report = ctx.runner().run(&config, &options, &TerminalEvents::new()).await?;
            print_summary(&report);
            report
        }
        OutputFormat::Json => {
            let report = ctx.runner().run(&config, &options, &NoopRunEvents).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            report
        }
    };

    let failed = report.failures().count();
    if failed > 0 {
        return Err(CliError::HooksFailed { failed }.into());
    }
    Ok(())
}
