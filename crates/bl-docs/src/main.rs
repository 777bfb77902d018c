//! BESTLIB documentation site CLI.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `routes`: Show the route table and navigation reachability
//! - `sample download`: Save a code sample as a file
//! - `sample copy`: Copy a code sample to the terminal clipboard

mod clipboard;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RoutesArgs, SampleCommand, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// bl-docs - BESTLIB documentation site.
#[derive(Parser)]
#[command(name = "bl-docs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Show registered routes and which navigation links reach them.
    Routes(RoutesArgs),
    /// Code sample commands.
    #[command(subcommand)]
    Sample(SampleCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG (default WARN)
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Routes(args) => args.execute(),
        Commands::Sample(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
