//! Request Handlers
//!
//! The two service pipelines. Handlers are stateless between requests:
//! the label handler holds only its collaborator clients, and the risk
//! handler holds the read-only model registry. Each invocation is a
//! single linear pipeline with no retries, no fan-out, and no partial
//! results.

pub mod labels;
pub mod risk;

pub use labels::{LabelHandler, LABEL_SERVICE_ID, MISSING_PARAMS_MESSAGE};
pub use risk::{RiskHandler, GRAPH_WEIGHT, RISK_SERVICE_ID, TABULAR_WEIGHT, TIME_SERIES_WEIGHT};
