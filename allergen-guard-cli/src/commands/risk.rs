//! Risk-scoring commands

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use allergen_guard_services::contracts::RiskRequest;
use allergen_guard_services::handlers::RiskHandler;
use allergen_guard_services::models::ModelRegistry;

use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct RiskCommands {
    #[command(subcommand)]
    pub command: RiskSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RiskSubcommand {
    /// Score a feature vector read from a JSON file (or stdin with "-")
    Score {
        /// Input file containing {"features": [...]}; "-" reads stdin
        #[arg(long, default_value = "-")]
        input: String,

        /// Model artifact directory
        #[arg(long, default_value = "./artifacts", env = "MODEL_DIR")]
        model_dir: PathBuf,
    },
}

pub async fn execute(format: OutputFormat, cmd: RiskCommands) -> Result<()> {
    match cmd.command {
        RiskSubcommand::Score { input, model_dir } => {
            let raw = if input == "-" {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("reading request from stdin")?;
                buffer
            } else {
                fs::read_to_string(&input).with_context(|| format!("reading {input}"))?
            };

            let request: RiskRequest =
                serde_json::from_str(&raw).context("parsing risk request")?;

            let registry = ModelRegistry::initialize(&model_dir).with_context(|| {
                format!("initializing model registry from {}", model_dir.display())
            })?;
            let handler = RiskHandler::new(Arc::new(registry));

            let response = handler.predict(request).await?;
            output::render(format, &response)
        }
    }
}
