//! # agency CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agency_cli::operations::{run_operations, OperationsArgs};
use agency_cli::validate::{run_validate, ValidateArgs};

/// Validate agency site request payloads against their schemas.
#[derive(Parser, Debug)]
#[command(name = "agency", version, about, long_about = None)]
struct Cli {
    /// Log filter directive, e.g. `debug` or `agency_schema=trace`.
    /// Falls back to `RUST_LOG` when not given.
    #[arg(long, global = true, env = "AGENCY_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON payload or raw query string for one operation.
    Validate(ValidateArgs),

    /// List operations and their top-level fields.
    Operations(OperationsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("agency CLI starting");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &mut stdout),
        Commands::Operations(args) => {
            run_operations(&args, agency_schema::global(), &mut stdout)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
