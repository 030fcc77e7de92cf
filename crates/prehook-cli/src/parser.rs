//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::{Parser, ValueEnum};

use crate::commands::Commands;

/// Command-line interface for the hook runner.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "prehook")]
#[command(about = "Run pinned third-party hooks declared in .pre-commit-config.yaml")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// When to colour output
    #[arg(long, value_enum, default_value_t, global = true, env = "PREHOOK_COLOR")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Colour mode for terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Apply the choice to stdout and stderr styling.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always | Self::Never => {
                let enabled = self == Self::Always;
                console::set_colors_enabled(enabled);
                console::set_colors_enabled_stderr(enabled);
            }
        }
    }
}
