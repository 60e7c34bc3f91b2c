//! Tabular ingredient-risk classifier.
//!
//! A logistic classifier over the flat feature row. The production system
//! never shipped trained coefficients for this model; the placeholder
//! constructor mirrors that, producing an even split until real
//! coefficients exist. With coefficients present, a width mismatch is an
//! inference error surfaced by the call.

use super::{sigmoid, InferenceError, ProbabilityClassifier};
use crate::contracts::risk::FeatureRow;

/// Logistic classifier handle.
#[derive(Debug, Clone)]
pub struct TabularClassifier {
    name: String,
    /// Empty for the untrained placeholder; otherwise one per feature.
    coefficients: Vec<f64>,
    intercept: f64,
}

impl TabularClassifier {
    /// Untrained placeholder, as deployed: no coefficients, zero
    /// intercept, so the positive-class probability is 0.5 for any input
    /// width.
    pub fn placeholder() -> Self {
        Self {
            name: "ingredient-risk".to_string(),
            coefficients: Vec::new(),
            intercept: 0.0,
        }
    }

    /// Classifier with concrete coefficients. Used by tests and available
    /// for a future trained artifact.
    pub fn with_coefficients(name: impl Into<String>, coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            intercept,
        }
    }
}

impl ProbabilityClassifier for TabularClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
        if !self.coefficients.is_empty() && row.width() != self.coefficients.len() {
            return Err(InferenceError::ShapeMismatch {
                model: self.name.clone(),
                expected: self.coefficients.len(),
                actual: row.width(),
            });
        }

        let z: f64 = self
            .coefficients
            .iter()
            .zip(row.values())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;

        let positive = sigmoid(z);
        Ok(vec![1.0 - positive, positive])
    }
}
