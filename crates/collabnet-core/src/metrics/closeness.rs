//! Closeness centrality over unweighted hop distance.
//!
//! # Definition
//!
//! For a node `v` that reaches `r` nodes (itself included) out of `n`:
//!
//! ```text
//! C(v) = (r - 1) / Σ d(v, u)  ×  (r - 1) / (n - 1)
//! ```
//!
//! The sum runs over reachable `u ≠ v` only. The second factor is the
//! Wasserman–Faust correction: a node that is central inside a small
//! component scores below one that is equally central in the whole graph.
//! Unreachable nodes are excluded rather than treated as infinitely far.
//!
//! A node that reaches nothing, and every node of a graph with fewer than two
//! nodes, scores 0.
//!
//! Edge weights are ignored here; distances are BFS hop counts.
//!
//! Complexity: O(V · (V + E)).

use std::collections::{HashMap, VecDeque};

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::graph::build::CollabGraph;

/// Compute closeness centrality for every node.
#[must_use]
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(g: &CollabGraph) -> HashMap<String, f64> {
    let n = g.node_count();
    if n < 2 {
        return g.names().map(|name| (name.to_string(), 0.0)).collect();
    }

    let mut result = HashMap::with_capacity(n);

    for source in g.graph.node_indices() {
        let (reached, total_distance) = bfs_reach(g, source);

        let score = if total_distance == 0 {
            0.0
        } else {
            let others = (reached - 1) as f64;
            (others / total_distance as f64) * (others / (n - 1) as f64)
        };

        result.insert(g.graph[source].clone(), score);
    }

    result
}

/// BFS from `source`. Returns the number of reached nodes (including the
/// source) and the sum of hop distances to them.
fn bfs_reach(g: &CollabGraph, source: NodeIndex) -> (usize, usize) {
    let n = g.node_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut dist = vec![0_usize; n];
    let mut queue = VecDeque::new();

    visited.insert(source.index());
    queue.push_back(source);

    let mut reached = 0;
    let mut total = 0;

    while let Some(v) = queue.pop_front() {
        reached += 1;
        total += dist[v.index()];

        for w in g.graph.neighbors(v) {
            if !visited.put(w.index()) {
                dist[w.index()] = dist[v.index()] + 1;
                queue.push_back(w);
            }
        }
    }

    (reached, total)
}
