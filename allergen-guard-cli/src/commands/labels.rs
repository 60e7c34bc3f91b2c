//! Labeling commands

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use allergen_guard_services::clients::{RekognitionDetector, S3ObjectStore};
use allergen_guard_services::contracts::LabelQuery;
use allergen_guard_services::handlers::LabelHandler;

use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct LabelsCommands {
    #[command(subcommand)]
    pub command: LabelsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LabelsSubcommand {
    /// Detect labels in an image stored at (bucket, key)
    Detect {
        /// Bucket holding the image
        #[arg(long)]
        bucket: String,

        /// Object key of the image
        #[arg(long)]
        key: String,
    },
}

pub async fn execute(format: OutputFormat, cmd: LabelsCommands) -> Result<()> {
    match cmd.command {
        LabelsSubcommand::Detect { bucket, key } => {
            let sdk_config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let handler = LabelHandler::new(
                Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config))),
                Arc::new(RekognitionDetector::new(aws_sdk_rekognition::Client::new(
                    &sdk_config,
                ))),
            );

            let response = handler.handle(LabelQuery::new(bucket, key)).await?;
            output::render(format, &response)
        }
    }
}
