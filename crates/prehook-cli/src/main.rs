//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the run service.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::style;
use tracing_subscriber::EnvFilter;

use prehook_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    // --verbose wins over RUST_LOG
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => {
            let ctx = bootstrap(CliConfig::with_defaults(args.config.as_deref())?)?;
            handlers::run::execute(&ctx, &args).await?;
        }
        Commands::ValidateConfig { paths } => {
            let config = CliConfig::with_defaults(None)?;
            handlers::validate::execute_config(&paths, &config.config_file)?;
        }
        Commands::ValidateManifest { paths } => {
            handlers::validate::execute_manifest(&paths)?;
        }
        Commands::List { config, format } => {
            let ctx = bootstrap(CliConfig::with_defaults(config.as_deref())?)?;
            handlers::list::execute(&ctx, format)?;
        }
        Commands::SampleConfig => handlers::sample::execute(),
        Commands::Clean => {
            let ctx = bootstrap(CliConfig::with_defaults(None)?)?;
            handlers::clean::execute(&ctx).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.color.apply();

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{e}");
        }
        return ExitCode::from(2);
    };

    match dispatch(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            let code = exit_code_for(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
