//! HTTP-edge error mapping.
//!
//! Status codes exist only here: handlers return [`ServiceError`] and the
//! two wrappers below convert it to each endpoint's wire format. The
//! labeling endpoint answers `{"error": <message>}` (400 for client
//! input, 500 otherwise); the risk endpoint answers
//! `{"detail": <message>}` with 500 on any failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use allergen_guard_services::ServiceError;

/// Error body of the labeling endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Failure message
    pub error: String,
}

/// Error body of the risk endpoint.
#[derive(Debug, Serialize)]
pub struct DetailBody {
    /// Failure message
    pub detail: String,
}

/// Labeling endpoint failure.
pub struct LabelsApiError(pub ServiceError);

impl From<ServiceError> for LabelsApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for LabelsApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Risk endpoint failure.
pub struct RiskApiError(pub ServiceError);

impl From<ServiceError> for RiskApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RiskApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DetailBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allergen_guard_services::clients::object_store::StorageError;
    use allergen_guard_services::handlers::MISSING_PARAMS_MESSAGE;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn client_input_maps_to_400_with_fixed_message() {
        let err = LabelsApiError(ServiceError::ClientInput(MISSING_PARAMS_MESSAGE.to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Missing bucket or key in query parameters"}"#
        );
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_500_with_cause() {
        let err = LabelsApiError(StorageError::Request("access denied".to_string()).into());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(response).await.contains("access denied"));
    }

    #[tokio::test]
    async fn risk_failures_render_a_detail_body() {
        let err = RiskApiError(ServiceError::ClientInput("whatever".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, r#"{"detail":"whatever"}"#);
    }
}
