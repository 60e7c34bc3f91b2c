//! Risk Scoring Handler
//!
//! Pipeline for the risk endpoint: reshape the feature vector to a single
//! row, run the three model scores one after another, and combine them
//! with fixed weights. The three inference calls are strictly sequential;
//! there is no partial result, no clamping, and no normalization. Any
//! failure from reshaping onward maps to a server error carrying the
//! original message.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::contracts::{FeatureRow, RiskRequest, RiskResponse, ServiceError};
use crate::models::{InferenceError, ModelRegistry};
use crate::telemetry::TelemetryEmitter;

/// Service identifier used in telemetry and registration.
pub const RISK_SERVICE_ID: &str = "risk-scoring";

/// Weight of the time-series score in the combined risk.
pub const TIME_SERIES_WEIGHT: f64 = 0.4;

/// Weight of the tabular-classifier score in the combined risk.
pub const TABULAR_WEIGHT: f64 = 0.4;

/// Weight of the supply-chain graph score in the combined risk.
pub const GRAPH_WEIGHT: f64 = 0.2;

/// Handler for risk-scoring requests.
pub struct RiskHandler {
    registry: Arc<ModelRegistry>,
    telemetry: TelemetryEmitter,
}

impl RiskHandler {
    /// Create a handler over an initialized registry.
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self::with_telemetry(registry, TelemetryEmitter::new())
    }

    /// Create a handler with an explicit telemetry emitter.
    pub fn with_telemetry(registry: Arc<ModelRegistry>, telemetry: TelemetryEmitter) -> Self {
        Self {
            registry,
            telemetry,
        }
    }

    /// Score one feature vector.
    #[instrument(skip(self, request), fields(features = request.features.len()))]
    pub async fn predict(&self, request: RiskRequest) -> Result<RiskResponse, ServiceError> {
        let start_time = Instant::now();
        let request_id = Uuid::new_v4();

        info!(%request_id, features = request.features.len(), "received risk request");
        self.telemetry
            .invocation_started(RISK_SERVICE_ID, request_id)
            .await;

        match self.score(request) {
            Ok(response) => {
                let duration_ms = start_time.elapsed().as_millis() as u64;
                info!(
                    %request_id,
                    risk = response.cross_contamination_risk,
                    duration_ms,
                    "risk scoring completed"
                );
                self.telemetry
                    .invocation_completed(
                        RISK_SERVICE_ID,
                        request_id,
                        serde_json::json!({ "risk": response.cross_contamination_risk }),
                        duration_ms,
                    )
                    .await;
                Ok(response)
            }
            Err(err) => {
                error!(%request_id, error = %err, "risk scoring failed");
                self.telemetry
                    .invocation_failed(
                        RISK_SERVICE_ID,
                        request_id,
                        &err.to_string(),
                        start_time.elapsed().as_millis() as u64,
                    )
                    .await;
                Err(err)
            }
        }
    }

    /// The scoring pipeline itself: three sequential model calls and a
    /// fixed-coefficient combination.
    fn score(&self, request: RiskRequest) -> Result<RiskResponse, ServiceError> {
        let row = FeatureRow::from_features(request.features);

        let time_series_score = self
            .registry
            .time_series()
            .predict(&row)?
            .first()
            .copied()
            .ok_or_else(|| InferenceError::EmptyOutput {
                model: self.registry.time_series().name().to_string(),
            })?;

        let tabular_score = self
            .registry
            .tabular()
            .predict_proba(&row)?
            .get(1)
            .copied()
            .ok_or_else(|| InferenceError::EmptyOutput {
                model: self.registry.tabular().name().to_string(),
            })?;

        // The graph handle is never queried against the input; its score
        // is the documented placeholder.
        let graph_score = self.registry.graph().risk_score();

        let cross_contamination_risk = TIME_SERIES_WEIGHT * time_series_score
            + TABULAR_WEIGHT * tabular_score
            + GRAPH_WEIGHT * graph_score;

        Ok(RiskResponse {
            cross_contamination_risk,
        })
    }
}
