//! Formdeck CLI - command-line client for the form catalog.
//!
//! The main entry point for the `formdeck` binary.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formdeck_app::{App, NullSurface};
use formdeck_cli::bridge::TermBridge;
use formdeck_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let assume_yes = matches!(&cli.command, Commands::Delete(args) if args.yes);
    let bridge = Arc::new(TermBridge::new(assume_yes));
    let app = App::new(cli.config(), cli.identity(), bridge, Arc::new(NullSurface))?;

    // Create runtime and execute
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match &cli.command {
            Commands::List(args) => formdeck_cli::commands::list::execute(args, &app, cli.format).await,
            Commands::Save(args) => formdeck_cli::commands::save::execute(args, &app).await,
            Commands::Delete(args) => formdeck_cli::commands::delete::execute(args, &app).await,
            Commands::Open(args) => formdeck_cli::commands::open::execute(args, &app).await,
        }
    })
}
