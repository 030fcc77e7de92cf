//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Run policy lives in the core service; this module only renders results

pub mod status;
pub mod tables;

// Re-export commonly used items
pub use status::{STATUS_WIDTH, TerminalEvents, format_status_line, print_summary};
pub use tables::{print_separator, truncate_string};
