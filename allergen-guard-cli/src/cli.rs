//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::commands::{labels::LabelsCommands, risk::RiskCommands};
use crate::output::OutputFormat;

/// Allergen Guard CLI
///
/// A command-line tool for labeling stored ingredient photos and scoring
/// ingredient feature vectors.
#[derive(Parser, Debug)]
#[command(name = "allergen-guard")]
#[command(version)]
#[command(about = "CLI for the Allergen Guard services", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (json, yaml)
    #[arg(short, long, global = true, default_value = "json", env = "ALLERGEN_GUARD_OUTPUT")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect labels in stored ingredient photos
    #[command(alias = "label")]
    Labels(LabelsCommands),

    /// Score ingredient feature vectors
    Risk(RiskCommands),
}
