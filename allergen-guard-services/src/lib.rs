//! Allergen Guard Services
//!
//! This crate provides the two glue services behind the Allergen Guard
//! product:
//!
//! - **Image labeling**: fetch an ingredient photo from object storage by
//!   `(bucket, key)` and forward it to a managed label-detection API,
//!   returning the detected label names in service order.
//! - **Risk scoring**: combine a time-series contamination-trend score,
//!   a tabular ingredient-risk score, and a placeholder supply-chain
//!   graph score into a single weighted cross-contamination risk.
//!
//! Both services are thin orchestration layers over external
//! collaborators. They are stateless per request; the only process-wide
//! state is the read-only [`models::ModelRegistry`] constructed once at
//! startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use allergen_guard_services::clients::{RekognitionDetector, S3ObjectStore};
//! use allergen_guard_services::contracts::LabelQuery;
//! use allergen_guard_services::handlers::LabelHandler;
//!
//! let handler = LabelHandler::new(
//!     Arc::new(S3ObjectStore::new(s3_client)),
//!     Arc::new(RekognitionDetector::new(rekognition_client)),
//! );
//! let response = handler.handle(LabelQuery::new("pantry-images", "peanut.jpg")).await?;
//! ```
//!
//! # Modules
//!
//! - [`contracts`]: wire schemas and the shared error taxonomy
//! - [`clients`]: object store and label-detection collaborators
//! - [`models`]: model handles and the read-only registry
//! - [`handlers`]: the two request pipelines
//! - [`telemetry`]: structured diagnostic events

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clients;
pub mod contracts;
pub mod handlers;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use clients::{
    DetectionError, LabelDetection, ObjectStore, RekognitionDetector, S3ObjectStore, StorageError,
};
pub use contracts::{
    get_service_registrations, DetectedLabel, FeatureRow, LabelQuery, LabelsResponse, RiskRequest,
    RiskResponse, ServiceError, ServiceRegistration,
};
pub use handlers::{LabelHandler, RiskHandler, LABEL_SERVICE_ID, MISSING_PARAMS_MESSAGE, RISK_SERVICE_ID};
pub use models::{InferenceError, ModelRegistry, SupplyChainGraph, TabularClassifier, TimeSeriesModel};
pub use telemetry::TelemetryEmitter;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
