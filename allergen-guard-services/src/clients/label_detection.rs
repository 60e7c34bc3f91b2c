//! Label Detection Client
//!
//! Managed vision API that returns candidate object/category names with
//! confidence scores for a given image. The production implementation
//! wraps the AWS Rekognition SDK.
//!
//! The request always asks for at most [`MAX_LABELS`] labels with minimum
//! confidence [`MIN_CONFIDENCE`]. Both are fixed product constants, not
//! configuration.

use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::contracts::labels::DetectedLabel;

/// Maximum number of labels requested from the detection service.
pub const MAX_LABELS: i32 = 10;

/// Minimum confidence (out of 100) a label must reach to be returned.
pub const MIN_CONFIDENCE: f32 = 70.0;

/// Errors from label detection operations.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The detection request failed: bad image, throttling, or the
    /// service being unreachable.
    #[error("label detection request failed: {0}")]
    Request(String),
}

/// Image bytes in, ordered `(name, confidence)` pairs out.
#[async_trait]
pub trait LabelDetection: Send + Sync {
    /// Detect labels in `image`, honoring the fixed [`MAX_LABELS`] and
    /// [`MIN_CONFIDENCE`] thresholds.
    ///
    /// The returned order is the service's ranking and must be preserved
    /// by callers.
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<DetectedLabel>, DetectionError>;
}

/// Rekognition-backed label detection.
#[derive(Clone)]
pub struct RekognitionDetector {
    client: aws_sdk_rekognition::Client,
}

impl RekognitionDetector {
    /// Wrap an already-configured Rekognition client.
    pub fn new(client: aws_sdk_rekognition::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelDetection for RekognitionDetector {
    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<DetectedLabel>, DetectionError> {
        let payload = Image::builder().bytes(Blob::new(image)).build();

        let output = self
            .client
            .detect_labels()
            .image(payload)
            .max_labels(MAX_LABELS)
            .min_confidence(MIN_CONFIDENCE)
            .send()
            .await
            .map_err(|err| DetectionError::Request(DisplayErrorContext(&err).to_string()))?;

        // Service order is the ranking; keep it.
        let labels: Vec<DetectedLabel> = output
            .labels()
            .iter()
            .filter_map(|label| {
                label.name().map(|name| DetectedLabel {
                    name: name.to_string(),
                    confidence: label.confidence().unwrap_or_default(),
                })
            })
            .collect();

        debug!(count = labels.len(), "label detection completed");
        Ok(labels)
    }
}
