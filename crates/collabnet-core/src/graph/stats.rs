//! Summary statistics for a collaboration graph.
//!
//! - **node_count** / **edge_count**: artists and collaborating pairs.
//! - **density**: `2E / (V(V-1))` for an undirected graph; 0 for fewer than
//!   two nodes.
//! - **component_count**: connected components. More than one means the
//!   scene splits into groups that never collaborated.
//! - **total_weight**: sum of all edge weights.
//! - **max_degree**: most distinct collaborators of any one artist.

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::build::CollabGraph;

/// Summary statistics for a [`CollabGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub component_count: usize,
    pub total_weight: f64,
    pub max_degree: usize,
    pub content_hash: String,
}

impl GraphStats {
    #[must_use]
    pub fn from_graph(g: &CollabGraph) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();

        let component_count = if node_count == 0 {
            0
        } else {
            connected_components(&g.graph)
        };

        let total_weight = g.graph.edge_references().map(|e| e.weight().weight).sum();

        let max_degree = g
            .graph
            .node_indices()
            .map(|idx| g.graph.neighbors(idx).count())
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            component_count,
            total_weight,
            max_degree,
            content_hash: g.content_hash.clone(),
        }
    }
}

/// Undirected density. Zero for fewer than two nodes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64 / 2.0;
    edge_count as f64 / max_edges
}
