//! Allergen Guard - Unified HTTP Service
//!
//! Single service exposing both glue endpoints:
//! - `GET /labels?bucket=<b>&key=<k>` - image labeling via object store +
//!   managed vision API
//! - `POST /predict_risk/` - cross-contamination risk from the model
//!   registry
//! - `GET /health`, `GET /ready` - probes
//!
//! The model registry is initialized once before the listener binds;
//! initialization failure aborts startup. Per request, all work is
//! strictly sequential; the hosting runtime decides whether invocations
//! overlap, which is safe because the registry is read-only after init.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;

use allergen_guard_services::clients::{RekognitionDetector, S3ObjectStore};
use allergen_guard_services::contracts::{LabelQuery, LabelsResponse, RiskRequest, RiskResponse};
use allergen_guard_services::handlers::{LabelHandler, RiskHandler};
use allergen_guard_services::models::ModelRegistry;
use allergen_guard_services::telemetry::TelemetryEmitter;

use error::{LabelsApiError, RiskApiError};

/// Application state shared by all routes.
///
/// Holds only the two handlers; the risk handler owns the read-only model
/// registry, so no mutable state is shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Image labeling handler
    label_handler: Arc<LabelHandler>,
    /// Risk scoring handler
    risk_handler: Arc<RiskHandler>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "allergen_guard_server=debug,allergen_guard_services=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(
        service = "allergen-guard-server",
        version = env!("CARGO_PKG_VERSION"),
        "Starting Allergen Guard service"
    );

    let config = config::Config::load()?;
    info!(
        port = config.port,
        platform_env = ?config.platform_env,
        model_dir = %config.model_dir.display(),
        "Configuration loaded"
    );

    // Model registry initialization is fatal on failure: without the
    // handles the risk endpoint cannot serve a single request.
    let registry = ModelRegistry::initialize(&config.model_dir)
        .with_context(|| format!("initializing model registry from {}", config.model_dir.display()))?;

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config)));
    let detector = Arc::new(RekognitionDetector::new(aws_sdk_rekognition::Client::new(
        &sdk_config,
    )));

    let telemetry =
        TelemetryEmitter::with_config(config.telemetry_endpoint.clone(), config.telemetry_stdout);

    let state = AppState {
        label_handler: Arc::new(LabelHandler::with_telemetry(
            store,
            detector,
            telemetry.clone(),
        )),
        risk_handler: Arc::new(RiskHandler::with_telemetry(Arc::new(registry), telemetry)),
    };
    info!("Application state initialized (registry read-only from here on)");

    let app = Router::new()
        .route("/labels", get(detect_labels))
        .route("/predict_risk/", post(predict_risk))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::OPTIONS, Method::POST, Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// =============================================================================
// Service Endpoints
// =============================================================================

/// GET /labels - detect labels in a stored image.
async fn detect_labels(
    State(state): State<AppState>,
    Query(query): Query<LabelQuery>,
) -> Result<Json<LabelsResponse>, LabelsApiError> {
    let response = state.label_handler.handle(query).await?;
    Ok(Json(response))
}

/// POST /predict_risk/ - score a feature vector.
async fn predict_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskRequest>,
) -> Result<Json<RiskResponse>, RiskApiError> {
    let response = state.risk_handler.predict(request).await?;
    Ok(Json(response))
}

// =============================================================================
// Health Endpoints
// =============================================================================

/// Liveness probe - always returns OK if the process is running.
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe - the registry is initialized before the listener
/// binds, so a served request implies readiness.
async fn readiness_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "READY")
}
