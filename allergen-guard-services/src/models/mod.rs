//! Predictive Model Handles
//!
//! The three model handles behind the risk endpoint: a time-series model
//! for contamination trends, a tabular classifier for ingredient risk,
//! and a supply-chain graph handle. All three are opaque collaborators to
//! the handler; it only calls the trait surface below.
//!
//! Handles are loaded or constructed once at process start, collected in
//! a read-only [`ModelRegistry`], and never mutated per request.

pub mod graph;
pub mod registry;
pub mod tabular;
pub mod time_series;

use thiserror::Error;

use crate::contracts::risk::FeatureRow;

pub use graph::{SupplyChainGraph, GRAPH_RISK_PLACEHOLDER};
pub use registry::ModelRegistry;
pub use tabular::TabularClassifier;
pub use time_series::TimeSeriesModel;

/// Errors from model loading or inference.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// A model artifact could not be read or parsed at startup.
    #[error("failed to load model artifact {path}: {message}")]
    Artifact {
        /// Artifact path that failed to load
        path: String,
        /// Underlying cause
        message: String,
    },

    /// The input row width does not match what the model was trained on.
    #[error("model {model} expected {expected} features, got {actual}")]
    ShapeMismatch {
        /// Model name
        model: String,
        /// Width the model expects
        expected: usize,
        /// Width of the supplied row
        actual: usize,
    },

    /// The model call returned no usable output.
    #[error("model {model} returned no output")]
    EmptyOutput {
        /// Model name
        model: String,
    },
}

/// Single-row regression over a feature sequence.
pub trait SequenceRegressor: Send + Sync {
    /// Model name, used in error messages and telemetry.
    fn name(&self) -> &str;

    /// Predict for one row; the first element is the scalar the risk
    /// pipeline consumes.
    fn predict(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError>;
}

/// Single-row class-probability prediction.
pub trait ProbabilityClassifier: Send + Sync {
    /// Model name, used in error messages and telemetry.
    fn name(&self) -> &str;

    /// Class probabilities for one row, `[negative, positive]`.
    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError>;
}

/// Logistic squashing shared by the linear model handles.
pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_and_bounded() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn shape_mismatch_message_names_the_model() {
        let err = InferenceError::ShapeMismatch {
            model: "contamination-trend".to_string(),
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "model contamination-trend expected 4 features, got 2"
        );
    }
}
