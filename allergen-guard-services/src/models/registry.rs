//! Model Registry
//!
//! Process-wide collection of the three model handles, constructed once
//! at startup and read-only thereafter. Initialization failure (missing
//! or unparsable artifact) is fatal: the caller refuses to serve. There
//! is no teardown; handles live for the process lifetime.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::graph::SupplyChainGraph;
use super::tabular::TabularClassifier;
use super::time_series::TimeSeriesModel;
use super::{InferenceError, ProbabilityClassifier, SequenceRegressor};

/// File name of the time-series artifact inside the model directory.
pub const TIME_SERIES_ARTIFACT: &str = "time_series.json";

/// Read-only registry of model handles.
#[derive(Clone)]
pub struct ModelRegistry {
    time_series: Arc<dyn SequenceRegressor>,
    tabular: Arc<dyn ProbabilityClassifier>,
    graph: SupplyChainGraph,
}

impl ModelRegistry {
    /// Initialize the registry from a model directory.
    ///
    /// Loads the time-series artifact, constructs the untrained tabular
    /// placeholder, and builds the fixed supply-chain graph handle.
    pub fn initialize(model_dir: &Path) -> Result<Self, InferenceError> {
        let time_series = TimeSeriesModel::load(&model_dir.join(TIME_SERIES_ARTIFACT))?;
        let tabular = TabularClassifier::placeholder();
        let graph = SupplyChainGraph::placeholder();

        info!(
            time_series = time_series.name(),
            tabular = tabular.name(),
            graph_nodes = graph.node_count(),
            graph_edges = graph.edge_count(),
            "model registry initialized"
        );

        Ok(Self {
            time_series: Arc::new(time_series),
            tabular: Arc::new(tabular),
            graph,
        })
    }

    /// Assemble a registry from explicit handles. Used by tests and the
    /// CLI when models are provided programmatically.
    pub fn with_models(
        time_series: Arc<dyn SequenceRegressor>,
        tabular: Arc<dyn ProbabilityClassifier>,
        graph: SupplyChainGraph,
    ) -> Self {
        Self {
            time_series,
            tabular,
            graph,
        }
    }

    /// The time-series model handle.
    pub fn time_series(&self) -> &dyn SequenceRegressor {
        self.time_series.as_ref()
    }

    /// The tabular classifier handle.
    pub fn tabular(&self) -> &dyn ProbabilityClassifier {
        self.tabular.as_ref()
    }

    /// The supply-chain graph handle.
    pub fn graph(&self) -> &SupplyChainGraph {
        &self.graph
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("time_series", &self.time_series.name())
            .field("tabular", &self.tabular.name())
            .field("graph", &self.graph)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::contracts::risk::FeatureRow;

    #[test]
    fn initialize_loads_artifacts_from_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(TIME_SERIES_ARTIFACT),
            r#"{"name":"contamination-trend","weights":[0.2,-0.1],"bias":0.05}"#,
        )
        .expect("write artifact");

        let registry = ModelRegistry::initialize(dir.path()).expect("initialize");
        assert_eq!(registry.time_series().name(), "contamination-trend");
        assert_eq!(registry.tabular().name(), "ingredient-risk");
        assert_eq!(registry.graph().node_count(), 10);

        let row = FeatureRow::from_features(vec![1.0, 2.0]);
        registry.time_series().predict(&row).expect("predict");
    }

    #[test]
    fn initialize_fails_without_artifact() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = ModelRegistry::initialize(dir.path()).expect_err("missing artifact");
        assert!(matches!(err, InferenceError::Artifact { .. }));
    }
}
