//! List command handler.
//!
//! Displays the configured repositories and hook entries in declared order.

use anyhow::Result;
use prehook_core::{HookConfig, load_config};
use serde_json::{Value, json};

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or parsed.
pub fn execute(ctx: &CliContext, format: OutputFormat) -> Result<()> {
    let config = load_config(&ctx.config_file)?;
    match format {
        OutputFormat::Text => print_table(&config),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(&config))?),
    }
    Ok(())
}

fn print_table(config: &HookConfig) {
    if config.repos.is_empty() {
        println!("No repositories configured.");
        println!("Use 'prehook sample-config' to get started.");
        return;
    }

    println!(
        "Found {} hook(s) in {} repositories{}:\n",
        config.hook_count(),
        config.repos.len(),
        if config.fail_fast { " (fail_fast)" } else { "" }
    );
    println!("{:<24} {:<12} {:<40} Args", "Hook", "Rev", "Repository");
    print_separator(100);

    for repo in &config.repos {
        for hook in &repo.hooks {
            let args = hook
                .args
                .as_ref()
                .map_or_else(|| "--".to_string(), |args| args.join(" "));
            println!(
                "{:<24} {:<12} {:<40} {}",
                truncate_string(&hook.id, 23),
                truncate_string(repo.rev.as_deref().unwrap_or("--"), 11),
                truncate_string(&repo.repo, 39),
                args
            );
        }
    }
}

fn to_json(config: &HookConfig) -> Value {
    let repos: Vec<Value> = config
        .repos
        .iter()
        .map(|repo| {
            json!({
                "repo": repo.repo,
                "rev": repo.rev,
                "hooks": repo.hooks.iter().map(|h| json!({
                    "id": h.id,
                    "alias": h.alias,
                    "args": h.args,
                    "additional_dependencies": h.additional_dependencies,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({ "fail_fast": config.fail_fast, "repos": repos })
}
