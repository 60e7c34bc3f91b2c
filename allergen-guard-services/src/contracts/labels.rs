//! Image-labeling contract types.

use serde::{Deserialize, Serialize};

/// Query parameters for an image-labeling request.
///
/// Both parameters address an object in the store. Presence is the only
/// validation performed; an empty string counts as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelQuery {
    /// Bucket holding the image
    pub bucket: Option<String>,

    /// Object key of the image
    pub key: Option<String>,
}

impl LabelQuery {
    /// Build a query from concrete values. Used by the CLI and tests.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
        }
    }

    /// Return `(bucket, key)` if both are present and non-empty.
    pub fn require(&self) -> Option<(&str, &str)> {
        match (self.bucket.as_deref(), self.key.as_deref()) {
            (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => {
                Some((bucket, key))
            }
            _ => None,
        }
    }
}

/// A single label returned by the detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    /// Label name, e.g. "Peanut"
    pub name: String,

    /// Detection confidence, 0..=100
    pub confidence: f32,
}

/// Successful labeling response.
///
/// Label names appear in the order the detection service returned them;
/// no re-sorting, no deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsResponse {
    /// Detected label names, service order preserved
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accepts_complete_query() {
        let query = LabelQuery::new("pantry-images", "peanut.jpg");
        assert_eq!(query.require(), Some(("pantry-images", "peanut.jpg")));
    }

    #[test]
    fn require_rejects_missing_or_empty() {
        assert_eq!(LabelQuery::default().require(), None);

        let query = LabelQuery {
            bucket: Some("pantry-images".to_string()),
            key: None,
        };
        assert_eq!(query.require(), None);

        let query = LabelQuery {
            bucket: Some(String::new()),
            key: Some("peanut.jpg".to_string()),
        };
        assert_eq!(query.require(), None);
    }

    #[test]
    fn labels_response_serializes_to_wire_shape() {
        let response = LabelsResponse {
            labels: vec!["Food".to_string(), "Peanut".to_string()],
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(json, r#"{"labels":["Food","Peanut"]}"#);
    }
}
