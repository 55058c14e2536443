//! Graph construction from an aggregated [`EdgeSet`].
//!
//! # Overview
//!
//! Every distinct canonical name in the edge set becomes one node and every
//! pair becomes one undirected edge carrying the summed weight. Nodes are
//! inserted in ascending name order so node indices, and everything derived
//! from them, are deterministic.
//!
//! Nodes only come from edges: an artist with no collaborations cannot be
//! represented. Callers that need isolated artists must add them upstream.
//!
//! ## Cache Invalidation
//!
//! [`CollabGraph::content_hash`] is a BLAKE3 digest of the sorted edge list
//! (names and weight bits). Equal edge sets hash equal regardless of the
//! record order they were aggregated from.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::aggregate::{EdgeSet, PairKey};
use crate::error::{CollabError, Result, is_valid_weight};

// ---------------------------------------------------------------------------
// CollabGraph
// ---------------------------------------------------------------------------

/// Payload of one collaboration edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollabEdge {
    /// Summed collaboration weight. Larger means a stronger relationship.
    pub weight: f64,
    /// Earliest known release year of the collaboration.
    pub first_year: Option<i32>,
}

/// An undirected weighted collaboration graph.
///
/// Nodes are canonical artist names. The graph has no self-loops and at most
/// one edge per pair. It is never mutated after [`CollabGraph::build`].
#[derive(Debug, Clone)]
pub struct CollabGraph {
    /// Undirected graph: nodes = canonical names, edges = collaborations.
    pub graph: UnGraph<String, CollabEdge>,
    /// Mapping from canonical name to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 hash of the edge set.
    pub content_hash: String,
}

impl CollabGraph {
    /// Build a [`CollabGraph`] from an aggregated edge set.
    ///
    /// # Errors
    ///
    /// - [`CollabError::MalformedEdge`] if a key pairs a name with itself.
    /// - [`CollabError::InvalidEdgeWeight`] if a weight is not a finite
    ///   positive number.
    #[instrument(skip(edges), fields(edges = edges.len()))]
    pub fn build(edges: &EdgeSet) -> Result<Self> {
        for (key, stats) in edges.iter() {
            if key.is_self_pair() {
                return Err(CollabError::MalformedEdge {
                    name: key.low().to_string(),
                });
            }
            if !is_valid_weight(stats.weight) {
                return Err(CollabError::InvalidEdgeWeight {
                    a: key.low().to_string(),
                    b: key.high().to_string(),
                    weight: stats.weight,
                });
            }
        }

        let names: BTreeSet<&str> = edges
            .iter()
            .flat_map(|(key, _)| [key.low(), key.high()])
            .collect();

        let mut graph = UnGraph::<String, CollabEdge>::with_capacity(names.len(), edges.len());
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(names.len());

        for name in names {
            let idx = graph.add_node(name.to_string());
            node_map.insert(name.to_string(), idx);
        }

        for (key, stats) in edges.iter() {
            let a = node_map[key.low()];
            let b = node_map[key.high()];
            graph.add_edge(
                a,
                b,
                CollabEdge {
                    weight: stats.weight,
                    first_year: stats.first_year,
                },
            );
        }

        let content_hash = compute_edge_hash(edges);

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built collaboration graph"
        );

        Ok(Self {
            graph,
            node_map,
            content_hash,
        })
    }

    /// Return the number of nodes (artists) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges (collaborating pairs) in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up the `NodeIndex` for a canonical name.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    /// Return the canonical name of a node.
    #[must_use]
    pub fn name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Canonical names in node-index order (ascending).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Weight of the edge between two canonical names, if any.
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        let edge = self.graph.find_edge(ia, ib)?;
        self.graph.edge_weight(edge).map(|e| e.weight)
    }

    /// Re-derive the `pair -> weight` mapping from the graph's edges.
    #[must_use]
    pub fn edge_weights(&self) -> BTreeMap<PairKey, f64> {
        self.graph
            .edge_references()
            .map(|e| {
                let key = PairKey::new(
                    self.graph[e.source()].clone(),
                    self.graph[e.target()].clone(),
                );
                (key, e.weight().weight)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// BLAKE3 over the edge set in key order.
fn compute_edge_hash(edges: &EdgeSet) -> String {
    let mut hasher = blake3::Hasher::new();
    for (key, stats) in edges.iter() {
        hasher.update(key.low().as_bytes());
        hasher.update(b"\x00");
        hasher.update(key.high().as_bytes());
        hasher.update(b"\x00");
        hasher.update(&stats.weight.to_bits().to_le_bytes());
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::CollaborationRecord;

    fn edge_set(edges: &[(&str, &str, f64)]) -> EdgeSet {
        EdgeSet::from_weights(
            edges
                .iter()
                .map(|(a, b, w)| (PairKey::new(*a, *b), *w)),
        )
    }

    #[test]
    fn empty_edge_set_produces_empty_graph() {
        let graph = CollabGraph::build(&EdgeSet::new()).expect("build graph");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.content_hash.starts_with("blake3:"));
    }

    #[test]
    fn one_node_per_distinct_name() {
        let graph =
            CollabGraph::build(&edge_set(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 1.0)]))
                .expect("build graph");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let names: Vec<_> = graph.names().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn edges_are_undirected() {
        let graph = CollabGraph::build(&edge_set(&[("A", "B", 3.0)])).expect("build graph");
        assert_eq!(graph.edge_weight("A", "B"), Some(3.0));
        assert_eq!(graph.edge_weight("B", "A"), Some(3.0));
        assert_eq!(graph.edge_weight("A", "C"), None);
    }

    #[test]
    fn self_pair_is_malformed() {
        let err = CollabGraph::build(&edge_set(&[("A", "B", 1.0), ("Duman", "Duman", 1.0)]))
            .expect_err("self pair");
        assert_eq!(
            err,
            CollabError::MalformedEdge {
                name: "Duman".to_string()
            }
        );
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let err = CollabGraph::build(&edge_set(&[("A", "B", 0.0)])).expect_err("zero weight");
        assert!(matches!(err, CollabError::InvalidEdgeWeight { .. }));
    }

    #[test]
    fn edge_weights_round_trip() {
        let set = edge_set(&[("A", "B", 1.5), ("C", "B", 2.0), ("A", "D", 7.0)]);
        let graph = CollabGraph::build(&set).expect("build graph");
        assert_eq!(graph.edge_weights(), set.weights());
    }

    #[test]
    fn first_year_travels_onto_edges() {
        let set = aggregate(&[
            CollaborationRecord::new("A", "B", 1.0).with_year(1990),
            CollaborationRecord::new("B", "A", 1.0).with_year(1977),
        ])
        .expect("aggregate");
        let graph = CollabGraph::build(&set).expect("build graph");
        let edge = graph.graph.edge_references().next().expect("one edge");
        assert_eq!(edge.weight().first_year, Some(1977));
    }

    #[test]
    fn content_hash_changes_with_edges() {
        let one = CollabGraph::build(&edge_set(&[("A", "B", 1.0)])).expect("build graph");
        let two = CollabGraph::build(&edge_set(&[("A", "B", 2.0)])).expect("build graph");
        let same = CollabGraph::build(&edge_set(&[("B", "A", 1.0)])).expect("build graph");
        assert_ne!(one.content_hash, two.content_hash);
        assert_eq!(one.content_hash, same.content_hash);
    }
}
