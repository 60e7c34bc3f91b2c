//! Telemetry
//!
//! Structured diagnostic events for both services. Every invocation emits
//! a started event and exactly one completed or failed event; failures are
//! always recorded before they are converted to a response.
//!
//! Events go to the `tracing` stream, optionally to stdout as JSON, and
//! optionally to an HTTP sink when one is configured. The sink is
//! best-effort: a delivery failure is logged and never affects the
//! request outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Telemetry event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryEventType {
    /// Service invocation started
    InvocationStarted,
    /// Service invocation completed successfully
    InvocationCompleted,
    /// Service invocation failed
    InvocationFailed,
}

/// A single telemetry event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Event ID
    pub event_id: Uuid,

    /// Event type
    pub event_type: TelemetryEventType,

    /// Timestamp
    pub timestamp: DateTime<Utc>,

    /// Service that emitted the event
    pub service: String,

    /// Request ID (for correlation)
    pub request_id: Uuid,

    /// Event payload
    pub payload: serde_json::Value,

    /// Duration in milliseconds (for completed/failed events)
    pub duration_ms: Option<u64>,
}

/// Emitter shared by both handlers.
#[derive(Clone)]
pub struct TelemetryEmitter {
    sink_endpoint: Option<String>,
    emit_to_stdout: bool,
    client: reqwest::Client,
}

impl Default for TelemetryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryEmitter {
    /// Create an emitter configured from the environment
    /// (`TELEMETRY_ENDPOINT`, `TELEMETRY_STDOUT`).
    pub fn new() -> Self {
        let sink_endpoint = std::env::var("TELEMETRY_ENDPOINT").ok();
        let emit_to_stdout = std::env::var("TELEMETRY_STDOUT")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Self::with_config(sink_endpoint, emit_to_stdout)
    }

    /// Create an emitter with explicit configuration.
    pub fn with_config(sink_endpoint: Option<String>, emit_to_stdout: bool) -> Self {
        Self {
            sink_endpoint,
            emit_to_stdout,
            client: reqwest::Client::new(),
        }
    }

    /// Emit an invocation-started event.
    pub async fn invocation_started(&self, service: &str, request_id: Uuid) {
        self.emit(TelemetryEvent {
            event_id: Uuid::new_v4(),
            event_type: TelemetryEventType::InvocationStarted,
            timestamp: Utc::now(),
            service: service.to_string(),
            request_id,
            payload: serde_json::Value::Null,
            duration_ms: None,
        })
        .await;
    }

    /// Emit an invocation-completed event with a service-specific payload.
    pub async fn invocation_completed(
        &self,
        service: &str,
        request_id: Uuid,
        payload: serde_json::Value,
        duration_ms: u64,
    ) {
        self.emit(TelemetryEvent {
            event_id: Uuid::new_v4(),
            event_type: TelemetryEventType::InvocationCompleted,
            timestamp: Utc::now(),
            service: service.to_string(),
            request_id,
            payload,
            duration_ms: Some(duration_ms),
        })
        .await;
    }

    /// Emit an invocation-failed event carrying the error message.
    pub async fn invocation_failed(
        &self,
        service: &str,
        request_id: Uuid,
        error_message: &str,
        duration_ms: u64,
    ) {
        self.emit(TelemetryEvent {
            event_id: Uuid::new_v4(),
            event_type: TelemetryEventType::InvocationFailed,
            timestamp: Utc::now(),
            service: service.to_string(),
            request_id,
            payload: serde_json::json!({ "error": error_message }),
            duration_ms: Some(duration_ms),
        })
        .await;
    }

    async fn emit(&self, event: TelemetryEvent) {
        match event.event_type {
            TelemetryEventType::InvocationFailed => {
                warn!(
                    event_type = ?event.event_type,
                    service = %event.service,
                    request_id = %event.request_id,
                    "telemetry: invocation failed"
                );
            }
            _ => {
                info!(
                    event_type = ?event.event_type,
                    service = %event.service,
                    request_id = %event.request_id,
                    "telemetry event"
                );
            }
        }

        if self.emit_to_stdout {
            if let Ok(json) = serde_json::to_string(&event) {
                debug!(telemetry = %json);
            }
        }

        if let Some(ref endpoint) = self.sink_endpoint {
            if let Err(err) = self.client.post(endpoint.as_str()).json(&event).send().await {
                warn!(endpoint = %endpoint, error = %err, "telemetry sink delivery failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_snake_case_type() {
        let event = TelemetryEvent {
            event_id: Uuid::new_v4(),
            event_type: TelemetryEventType::InvocationCompleted,
            timestamp: Utc::now(),
            service: "image-labeling".to_string(),
            request_id: Uuid::new_v4(),
            payload: serde_json::json!({"labels": 3}),
            duration_ms: Some(42),
        };

        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("invocation_completed"));
    }

    #[tokio::test]
    async fn emitting_without_a_sink_is_a_no_op_side_effect() {
        let emitter = TelemetryEmitter::with_config(None, false);
        emitter
            .invocation_failed("risk-scoring", Uuid::new_v4(), "boom", 1)
            .await;
    }
}
