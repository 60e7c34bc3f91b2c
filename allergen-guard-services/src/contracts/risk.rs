//! Risk-scoring contract types.

use serde::{Deserialize, Serialize};

/// Body of a risk-scoring request.
///
/// A flat numeric feature vector of arbitrary length. Length and value
/// ranges are not validated here; a width the loaded models cannot accept
/// surfaces as an inference error from the model call itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRequest {
    /// Ingredient feature vector
    pub features: Vec<f64>,
}

/// Successful risk-scoring response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    /// Weighted combination of the three model scores
    pub cross_contamination_risk: f64,
}

/// A feature vector reshaped into a single row of shape `(1, N)`.
///
/// Models consume one row per prediction; this type records that the
/// incoming flat vector has been reshaped, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    /// Reshape a flat feature vector into a single row.
    pub fn from_features(features: Vec<f64>) -> Self {
        Self { values: features }
    }

    /// Row width `N`.
    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// The row values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_row_preserves_width_and_order() {
        let row = FeatureRow::from_features(vec![0.1, 0.2, 0.3]);
        assert_eq!(row.width(), 3);
        assert_eq!(row.values(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn empty_features_reshape_to_zero_width_row() {
        let row = FeatureRow::from_features(Vec::new());
        assert_eq!(row.width(), 0);
    }

    #[test]
    fn risk_request_round_trips() {
        let request: RiskRequest =
            serde_json::from_str(r#"{"features":[0.5,1.0,2.5]}"#).expect("deserialize");
        assert_eq!(request.features, vec![0.5, 1.0, 2.5]);
    }

    #[test]
    fn risk_response_serializes_to_wire_shape() {
        let response = RiskResponse {
            cross_contamination_risk: 0.66,
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(json, r#"{"cross_contamination_risk":0.66}"#);
    }
}
