//! Weighted betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness measures how often an artist lies on shortest paths between
//! two other artists. High-betweenness artists bridge otherwise separate
//! circles of the scene.
//!
//! # Distance
//!
//! Edge weight is collaboration *strength*, so a heavier edge must be a
//! *shorter* hop. Path lengths use [`distance`](super::distance)
//! (`1 / weight`) for every edge.
//!
//! # Algorithm
//!
//! Brandes (2001), weighted variant:
//!
//! 1. For each source `s`, run Dijkstra to get distances, shortest-path
//!    counts `σ`, and predecessor lists. Nodes are settled in
//!    non-decreasing distance order.
//! 2. Walk the settled nodes backwards, accumulating dependencies
//!    `δ(v) += σ(v)/σ(w) · (1 + δ(w))` for each predecessor `v` of `w`.
//! 3. Sum `δ` over all sources, then halve: in an undirected graph every
//!    unordered pair is visited once from each end.
//!
//! Complexity: O(V · E · log V).
//!
//! # Output
//!
//! Scores are **not** normalized. A node's score is the number of
//! shortest paths (fractionally, over ties) between other nodes that pass
//! through it. Unreachable pairs contribute nothing.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::instrument;

use super::{distance, same_distance};
use crate::graph::build::CollabGraph;

/// Compute weighted betweenness centrality for every node.
///
/// Graphs with fewer than three nodes have no intermediaries; every node
/// scores 0.
#[must_use]
#[instrument(skip(g))]
pub fn betweenness_centrality(g: &CollabGraph) -> HashMap<String, f64> {
    let n = g.node_count();
    let mut cb: Vec<f64> = vec![0.0; n];

    if n >= 3 {
        for s in g.graph.node_indices() {
            accumulate_from_source(g, s, &mut cb);
        }
    }

    g.graph
        .node_indices()
        .map(|idx| (g.graph[idx].clone(), cb[idx.index()] / 2.0))
        .collect()
}

/// One Brandes pass from `s`, adding each node's dependency to `cb`.
fn accumulate_from_source(g: &CollabGraph, s: NodeIndex, cb: &mut [f64]) {
    let n = g.node_count();
    let si = s.index();

    // Settled nodes in non-decreasing distance order.
    let mut order: Vec<NodeIndex> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);
    let mut heap = BinaryHeap::new();

    sigma[si] = 1.0;
    dist[si] = Some(0.0);
    heap.push(Candidate { dist: 0.0, node: s });

    while let Some(Candidate { dist: d, node: v }) = heap.pop() {
        if settled.put(v.index()) {
            continue;
        }
        order.push(v);

        for edge in g.graph.edges(v) {
            let w = edge.target();
            let wi = w.index();
            if settled.contains(wi) {
                continue;
            }

            let candidate = d + distance(edge.weight().weight);
            match dist[wi] {
                Some(current) if same_distance(candidate, current) => {
                    sigma[wi] += sigma[v.index()];
                    predecessors[wi].push(v);
                }
                Some(current) if candidate > current => {}
                _ => {
                    dist[wi] = Some(candidate);
                    sigma[wi] = sigma[v.index()];
                    predecessors[wi].clear();
                    predecessors[wi].push(v);
                    heap.push(Candidate {
                        dist: candidate,
                        node: w,
                    });
                }
            }
        }
    }

    let mut delta: Vec<f64> = vec![0.0; n];

    while let Some(w) = order.pop() {
        let wi = w.index();
        for &v in &predecessors[wi] {
            let vi = v.index();
            delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
        }
        if wi != si {
            cb[wi] += delta[wi];
        }
    }
}

/// Min-heap entry for Dijkstra.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist: f64,
    node: NodeIndex,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // Reversed so BinaryHeap pops the smallest distance; index breaks ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{EdgeSet, PairKey};

    fn graph(edges: &[(&str, &str, f64)]) -> CollabGraph {
        let set = EdgeSet::from_weights(edges.iter().map(|(a, b, w)| (PairKey::new(*a, *b), *w)));
        CollabGraph::build(&set).expect("build graph")
    }

    fn assert_score(bc: &HashMap<String, f64>, name: &str, expected: f64) {
        assert!(
            (bc[name] - expected).abs() < 1e-10,
            "{name}: expected {expected}, got {}",
            bc[name]
        );
    }

    #[test]
    fn empty_graph_returns_empty() {
        assert!(betweenness_centrality(&graph(&[])).is_empty());
    }

    #[test]
    fn single_edge_zero_betweenness() {
        let bc = betweenness_centrality(&graph(&[("A", "B", 1.0)]));
        assert_score(&bc, "A", 0.0);
        assert_score(&bc, "B", 0.0);
    }

    #[test]
    fn path_middle_node_counts_once_per_pair() {
        // A-B-C: B is on the only A–C path.
        let bc = betweenness_centrality(&graph(&[("A", "B", 1.0), ("B", "C", 1.0)]));
        assert_score(&bc, "A", 0.0);
        assert_score(&bc, "B", 1.0);
        assert_score(&bc, "C", 0.0);
    }

    #[test]
    fn path_of_four() {
        // A-B-C-D
        // B on A–C, A–D → 2; C on A–D, B–D → 2
        let bc = betweenness_centrality(&graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]));
        assert_score(&bc, "A", 0.0);
        assert_score(&bc, "B", 2.0);
        assert_score(&bc, "C", 2.0);
        assert_score(&bc, "D", 0.0);
    }

    #[test]
    fn triangle_with_strong_edge_has_no_intermediary() {
        // distances: A–B 0.5, B–C 1, A–C 1. Every direct edge is shortest.
        let bc = betweenness_centrality(&graph(&[("A", "B", 2.0), ("B", "C", 1.0), ("A", "C", 1.0)]));
        assert_score(&bc, "A", 0.0);
        assert_score(&bc, "B", 0.0);
        assert_score(&bc, "C", 0.0);
    }

    #[test]
    fn strong_chain_beats_weak_direct_edge() {
        // A–B and B–C are strong (distance 0.25 each), A–C is weak (distance 1).
        // A → B → C (0.5) is shorter than A → C (1.0), so B carries A–C.
        let bc = betweenness_centrality(&graph(&[("A", "B", 4.0), ("B", "C", 4.0), ("A", "C", 1.0)]));
        assert_score(&bc, "A", 0.0);
        assert_score(&bc, "B", 1.0);
        assert_score(&bc, "C", 0.0);
    }

    #[test]
    fn tied_paths_split_credit() {
        // Square A-B-D and A-C-D, all weight 1: B and C each carry half of A–D.
        // Likewise A and D each carry half of B–C.
        let bc = betweenness_centrality(&graph(&[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
        ]));
        for name in ["A", "B", "C", "D"] {
            assert_score(&bc, name, 0.5);
        }
    }

    #[test]
    fn ties_survive_float_rounding() {
        // Three light hops (1/3 + 1/3 + 1/3) tie with one unit hop.
        // A-X-Y-D with weight 3 each, and A-B-D with weights 2 and 2.
        // A–D: 1.0 via X,Y and 1.0 via B → two shortest paths.
        let bc = betweenness_centrality(&graph(&[
            ("A", "X", 3.0),
            ("X", "Y", 3.0),
            ("Y", "D", 3.0),
            ("A", "B", 2.0),
            ("B", "D", 2.0),
        ]));
        // B is on one of the two A–D paths, and on nothing else.
        assert_score(&bc, "B", 0.5);
    }

    #[test]
    fn very_heavy_edge_creates_no_false_ties() {
        // S-A and S-B weigh 1, A-B weighs 1e13. Every direct edge is the
        // strict shortest path, including S-A against S-B-A (1 vs 1 + 1e-13).
        let bc = betweenness_centrality(&graph(&[
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "B", 1e13),
        ]));
        for name in ["S", "A", "B"] {
            assert_score(&bc, name, 0.0);
        }
    }

    #[test]
    fn star_center_carries_every_leaf_pair() {
        // Hub with 4 leaves: C(4, 2) = 6 leaf pairs, all through the hub.
        let bc = betweenness_centrality(&graph(&[
            ("Hub", "A", 1.0),
            ("Hub", "B", 2.0),
            ("Hub", "C", 3.0),
            ("Hub", "D", 4.0),
        ]));
        assert_score(&bc, "Hub", 6.0);
        for leaf in ["A", "B", "C", "D"] {
            assert_score(&bc, leaf, 0.0);
        }
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        let bc = betweenness_centrality(&graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("D", "E", 1.0)]));
        assert_score(&bc, "B", 1.0);
        assert_score(&bc, "D", 0.0);
        assert_score(&bc, "E", 0.0);
    }
}
