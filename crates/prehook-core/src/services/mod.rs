//! Services that orchestrate ports into use cases.

mod digest;
mod hook_run;

pub use hook_run::{HookRunService, NO_FILES_REASON, RunOptions};
