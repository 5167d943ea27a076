//! Bifrost CLI - platform-agnostic project scaffolding
//!
//! This is the main entry point for the Bifrost command-line interface.

mod cli;
mod commands;
mod output;
mod prompts;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    match cli.command {
        Commands::New(args) => commands::new::run(args).await,
        Commands::Templates(args) => commands::templates::run(args).await,
        Commands::Wizard(args) => commands::wizard::run(args).await,
        Commands::Submit(args) => commands::submit::run(args).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Interactive output is the default; -v/-vv surface the
            // subprocess and network detail behind it
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
