//! Supply-chain graph handle.
//!
//! A placeholder: the handle is constructed once at startup from a fixed
//! toy topology and is never queried against request data. Its risk score
//! is the documented constant [`GRAPH_RISK_PLACEHOLDER`]. Kept as a real
//! graph so the handle's lifecycle matches the other models.

use petgraph::graph::DiGraph;

/// Fixed score the graph handle contributes to every request.
pub const GRAPH_RISK_PLACEHOLDER: f64 = 0.5;

const NODE_COUNT: usize = 10;
const EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 3)];

/// Read-only supply-chain graph.
#[derive(Debug, Clone)]
pub struct SupplyChainGraph {
    graph: DiGraph<u32, ()>,
}

impl SupplyChainGraph {
    /// Build the fixed toy topology: 10 nodes, edges 0→1, 1→2, 2→3.
    pub fn placeholder() -> Self {
        let mut graph = DiGraph::new();
        let nodes: Vec<_> = (0..NODE_COUNT as u32).map(|i| graph.add_node(i)).collect();
        for (source, target) in EDGES {
            graph.add_edge(nodes[source], nodes[target], ());
        }
        Self { graph }
    }

    /// Number of nodes in the handle's topology.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the handle's topology.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Supply-chain risk score.
    ///
    /// Always the placeholder constant; the graph itself is not consulted.
    pub fn risk_score(&self) -> f64 {
        GRAPH_RISK_PLACEHOLDER
    }
}

impl Default for SupplyChainGraph {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_topology_is_fixed() {
        let graph = SupplyChainGraph::placeholder();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn risk_score_is_the_placeholder_constant() {
        let graph = SupplyChainGraph::placeholder();
        assert_eq!(graph.risk_score(), GRAPH_RISK_PLACEHOLDER);
        assert_eq!(graph.risk_score(), 0.5);
    }
}
