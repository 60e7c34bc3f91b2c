//! Allergen Guard CLI
//!
//! Command-line interface that invokes the labeling and risk pipelines
//! locally, without going through the HTTP service.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("allergen_guard=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Labels(cmd) => commands::labels::execute(cli.output, cmd).await,
        Commands::Risk(cmd) => commands::risk::execute(cli.output, cmd).await,
    }
}
