//! Image Label Handler
//!
//! Pipeline for the labeling endpoint: validate the `bucket`/`key`
//! parameters, fetch the image bytes from the object store, forward them
//! to the label-detection service, and shape the result. Validation
//! failures return before any external call; collaborator failures
//! propagate with their original message. The service's label order and
//! count are preserved exactly.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::clients::{LabelDetection, ObjectStore};
use crate::contracts::{LabelQuery, LabelsResponse, ServiceError};
use crate::telemetry::TelemetryEmitter;

/// Service identifier used in telemetry and registration.
pub const LABEL_SERVICE_ID: &str = "image-labeling";

/// Fixed client-error message for absent or empty parameters.
pub const MISSING_PARAMS_MESSAGE: &str = "Missing bucket or key in query parameters";

/// Handler for image-labeling requests.
pub struct LabelHandler {
    store: Arc<dyn ObjectStore>,
    detector: Arc<dyn LabelDetection>,
    telemetry: TelemetryEmitter,
}

impl LabelHandler {
    /// Create a handler over the given collaborators.
    pub fn new(store: Arc<dyn ObjectStore>, detector: Arc<dyn LabelDetection>) -> Self {
        Self::with_telemetry(store, detector, TelemetryEmitter::new())
    }

    /// Create a handler with an explicit telemetry emitter.
    pub fn with_telemetry(
        store: Arc<dyn ObjectStore>,
        detector: Arc<dyn LabelDetection>,
        telemetry: TelemetryEmitter,
    ) -> Self {
        Self {
            store,
            detector,
            telemetry,
        }
    }

    /// Handle one labeling request.
    #[instrument(skip(self, query))]
    pub async fn handle(&self, query: LabelQuery) -> Result<LabelsResponse, ServiceError> {
        let start_time = Instant::now();
        let request_id = Uuid::new_v4();

        // Log the raw inbound request before doing anything with it.
        info!(
            %request_id,
            bucket = ?query.bucket,
            key = ?query.key,
            "received labeling request"
        );
        self.telemetry
            .invocation_started(LABEL_SERVICE_ID, request_id)
            .await;

        let Some((bucket, key)) = query.require() else {
            error!(%request_id, "{}", MISSING_PARAMS_MESSAGE);
            self.telemetry
                .invocation_failed(
                    LABEL_SERVICE_ID,
                    request_id,
                    MISSING_PARAMS_MESSAGE,
                    start_time.elapsed().as_millis() as u64,
                )
                .await;
            return Err(ServiceError::ClientInput(MISSING_PARAMS_MESSAGE.to_string()));
        };

        let image = match self.store.get_object(bucket, key).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(%request_id, error = %err, "object fetch failed");
                self.telemetry
                    .invocation_failed(
                        LABEL_SERVICE_ID,
                        request_id,
                        &err.to_string(),
                        start_time.elapsed().as_millis() as u64,
                    )
                    .await;
                return Err(err.into());
            }
        };

        let detected = match self.detector.detect_labels(&image).await {
            Ok(labels) => labels,
            Err(err) => {
                error!(%request_id, error = %err, "label detection failed");
                self.telemetry
                    .invocation_failed(
                        LABEL_SERVICE_ID,
                        request_id,
                        &err.to_string(),
                        start_time.elapsed().as_millis() as u64,
                    )
                    .await;
                return Err(err.into());
            }
        };

        // Service order is the ranking; keep order and count as returned.
        let labels: Vec<String> = detected.into_iter().map(|label| label.name).collect();

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(%request_id, count = labels.len(), duration_ms, "labeling completed");
        self.telemetry
            .invocation_completed(
                LABEL_SERVICE_ID,
                request_id,
                serde_json::json!({ "labels": labels.len() }),
                duration_ms,
            )
            .await;

        Ok(LabelsResponse { labels })
    }
}
