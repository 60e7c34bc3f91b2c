//! Contract Types
//!
//! Wire-level request and response schemas for both Allergen Guard
//! services, plus the shared error taxonomy. Handlers accept and return
//! these types; the HTTP edge (server crate) only converts them to and
//! from status codes and JSON bodies.

pub mod labels;
pub mod risk;

use thiserror::Error;

use crate::clients::label_detection::DetectionError;
use crate::clients::object_store::StorageError;
use crate::models::InferenceError;

pub use labels::{DetectedLabel, LabelQuery, LabelsResponse};
pub use risk::{FeatureRow, RiskRequest, RiskResponse};

/// Error taxonomy shared by both handlers.
///
/// `ClientInput` is the only 4xx-class failure; every collaborator error is
/// a 5xx-class failure carried through transparently so the original
/// message reaches the response body. Status-code mapping happens at the
/// HTTP edge only.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing request data.
    #[error("{0}")]
    ClientInput(String),

    /// Object store failure while fetching image bytes.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Label-detection service failure.
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// Model loading or inference failure.
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl ServiceError {
    /// Whether this failure was caused by the caller's input.
    pub fn is_client_input(&self) -> bool {
        matches!(self, ServiceError::ClientInput(_))
    }
}

/// Registration information for platform wiring.
#[derive(Debug, Clone)]
pub struct ServiceRegistration {
    /// Service identifier
    pub id: String,
    /// HTTP method
    pub method: String,
    /// Endpoint path
    pub endpoint_path: String,
    /// CLI command
    pub cli_command: String,
}

/// Get registration info for both services.
pub fn get_service_registrations() -> Vec<ServiceRegistration> {
    vec![
        ServiceRegistration {
            id: crate::handlers::labels::LABEL_SERVICE_ID.to_string(),
            method: "GET".to_string(),
            endpoint_path: "/labels".to_string(),
            cli_command: "labels detect".to_string(),
        },
        ServiceRegistration {
            id: crate::handlers::risk::RISK_SERVICE_ID.to_string(),
            method: "POST".to_string(),
            endpoint_path: "/predict_risk/".to_string(),
            cli_command: "risk score".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_input_is_distinguished() {
        let err = ServiceError::ClientInput("missing".to_string());
        assert!(err.is_client_input());

        let err = ServiceError::Storage(StorageError::Request("boom".to_string()));
        assert!(!err.is_client_input());
    }

    #[test]
    fn collaborator_errors_keep_their_message() {
        let err: ServiceError = StorageError::Request("access denied".to_string()).into();
        assert_eq!(err.to_string(), "object store request failed: access denied");
    }

    #[test]
    fn registrations_cover_both_services() {
        let registrations = get_service_registrations();
        assert_eq!(registrations.len(), 2);
        assert_eq!(registrations[0].endpoint_path, "/labels");
        assert_eq!(registrations[1].endpoint_path, "/predict_risk/");
    }
}
