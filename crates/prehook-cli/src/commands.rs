//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run hooks against the project's files
    Run(RunArgs),

    /// Check configuration files for schema and structural errors
    ValidateConfig {
        /// Files to check (defaults to the project's configuration)
        paths: Vec<PathBuf>,
    },

    /// Check hook manifest files (.pre-commit-hooks.yaml)
    ValidateManifest {
        /// Files to check (defaults to ./.pre-commit-hooks.yaml)
        paths: Vec<PathBuf>,
    },

    /// List configured repositories and hooks
    List {
        /// Configuration file to read
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print a starter configuration
    SampleConfig,

    /// Remove cached hook repositories
    Clean,
}

/// Arguments for `prehook run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Configuration file to read
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run on every file in the project (the default)
    #[arg(short, long, conflicts_with = "files")]
    pub all_files: bool,

    /// Run on these files only
    #[arg(long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Run only the hook with this id or alias (repeatable)
    #[arg(long = "hook", value_name = "ID")]
    pub hooks: Vec<String>,

    /// Stop at the first failing hook
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Output format for commands that print structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
