//! Degree and weighted degree.
//!
//! Both are local: one pass over each node's incident edges. The graph has at
//! most one edge per pair, so the neighbor count equals the number of
//! distinct collaborators.

use std::collections::HashMap;

use crate::graph::build::CollabGraph;

/// Number of distinct edges incident to each node.
#[must_use]
pub fn degree_centrality(g: &CollabGraph) -> HashMap<String, usize> {
    g.graph
        .node_indices()
        .map(|idx| (g.graph[idx].clone(), g.graph.edges(idx).count()))
        .collect()
}

/// Sum of incident edge weights for each node.
#[must_use]
pub fn weighted_degree(g: &CollabGraph) -> HashMap<String, f64> {
    g.graph
        .node_indices()
        .map(|idx| {
            let total: f64 = g.graph.edges(idx).map(|e| e.weight().weight).sum();
            (g.graph[idx].clone(), total)
        })
        .collect()
}
