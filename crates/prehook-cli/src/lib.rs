//! CLI adapter for prehook.
//!
//! Parses the command line, wires the runtime adapters into the core run
//! service (see [`bootstrap`]) and renders results for the terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by integration tests only
#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod files;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, OutputFormat, RunArgs};
pub use error::{CliError, exit_code_for};
pub use parser::{Cli, ColorChoice};
