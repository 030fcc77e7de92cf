//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the core service or loaders
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain run policy; that lives in `HookRunService`.

pub mod clean;
pub mod list;
pub mod run;
pub mod sample;
pub mod validate;
