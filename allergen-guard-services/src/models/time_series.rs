//! Time-series contamination-trend model.
//!
//! A linear model with a logistic output, loaded from a JSON artifact at
//! process start. Loading failure is fatal to the process (the registry
//! refuses to initialize); a width mismatch at prediction time surfaces
//! as an inference error from the call itself.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{sigmoid, InferenceError, SequenceRegressor};
use crate::contracts::risk::FeatureRow;

/// Serialized form of the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesModel {
    /// Model name reported in errors and telemetry
    pub name: String,

    /// Per-feature weights; their count fixes the expected row width
    pub weights: Vec<f64>,

    /// Bias term
    pub bias: f64,
}

impl TimeSeriesModel {
    /// Load the model from a JSON artifact.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let raw = fs::read_to_string(path).map_err(|err| InferenceError::Artifact {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let model: Self = serde_json::from_str(&raw).map_err(|err| InferenceError::Artifact {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        info!(
            model = %model.name,
            features = model.weights.len(),
            "loaded time-series model artifact"
        );
        Ok(model)
    }
}

impl SequenceRegressor for TimeSeriesModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
        if row.width() != self.weights.len() {
            return Err(InferenceError::ShapeMismatch {
                model: self.name.clone(),
                expected: self.weights.len(),
                actual: row.width(),
            });
        }

        let z: f64 = self
            .weights
            .iter()
            .zip(row.values())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;

        // One scalar per row; the pipeline consumes the first.
        Ok(vec![sigmoid(z)])
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn model() -> TimeSeriesModel {
        TimeSeriesModel {
            name: "contamination-trend".to_string(),
            weights: vec![0.2, -0.1],
            bias: 0.05,
        }
    }

    #[test]
    fn predict_returns_one_logistic_scalar() {
        let row = FeatureRow::from_features(vec![1.0, 2.0]);
        let out = model().predict(&row).expect("predict");

        // z = 0.2*1.0 - 0.1*2.0 + 0.05 = 0.05
        let expected = 1.0 / (1.0 + (-0.05f64).exp());
        assert_eq!(out.len(), 1);
        assert!((out[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn predict_rejects_width_mismatch() {
        let row = FeatureRow::from_features(vec![1.0]);
        let err = model().predict(&row).expect_err("shape mismatch");
        assert!(matches!(err, InferenceError::ShapeMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn load_round_trips_an_artifact() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&model()).expect("serialize");
        file.write_all(json.as_bytes()).expect("write");

        let loaded = TimeSeriesModel::load(file.path()).expect("load");
        assert_eq!(loaded.name, "contamination-trend");
        assert_eq!(loaded.weights, vec![0.2, -0.1]);
    }

    #[test]
    fn load_fails_on_missing_artifact() {
        let err = TimeSeriesModel::load(Path::new("/nonexistent/time_series.json"))
            .expect_err("missing artifact");
        assert!(matches!(err, InferenceError::Artifact { .. }));
    }
}
