//! Clean command handler.

use anyhow::Result;
use prehook_core::paths::repos_dir;

use crate::bootstrap::CliContext;

/// Remove every cached repository checkout.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.runner().resolver().clean().await?;
    println!("Cleaned {}", repos_dir(&ctx.cache_dir).display());
    Ok(())
}
