//! Centrality metrics for the collaboration graph.
//!
//! # Overview
//!
//! Every metric is a pure read over a built [`CollabGraph`] and returns
//! scores keyed by canonical name:
//!
//! - **Degree** (`basic`): how many distinct collaborators an artist has.
//! - **Weighted degree** (`basic`): total collaboration weight.
//! - **Betweenness** (`betweenness`): which artists bridge circles, over
//!   weighted shortest paths.
//! - **Closeness** (`closeness`): how few hops an artist is from everyone
//!   they can reach.
//!
//! # Weight as distance
//!
//! Weight means strength, so wherever a weight is read as a path length it
//! goes through [`distance`]: `1 / weight`. Betweenness is the only weighted
//! shortest-path consumer; closeness uses hop counts.
//!
//! # Usage
//!
//! ```rust,ignore
//! let scores = CentralityScores::compute(&graph);
//! let bridge = scores.betweenness("Cem Karaca");
//! ```

pub mod basic;
pub mod betweenness;
pub mod closeness;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::graph::build::CollabGraph;

pub use basic::{degree_centrality, weighted_degree};
pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;

/// Relative tolerance under which two path lengths count as equal.
///
/// A few dozen ULPs: enough for rounding in sums of `1 / weight` terms along
/// short paths. Two paths whose lengths differ by a smaller relative amount
/// are tied, so edge weights spanning a ratio of more than about `1e13`
/// cannot be told apart.
pub const DISTANCE_TOLERANCE: f64 = 64.0 * f64::EPSILON;

/// Path length of an edge with the given collaboration weight.
///
/// Monotonically decreasing: stronger collaborations are closer.
#[must_use]
pub fn distance(weight: f64) -> f64 {
    1.0 / weight
}

/// Compare two path lengths with [`DISTANCE_TOLERANCE`], relative to the
/// larger of the two.
#[must_use]
pub fn same_distance(a: f64, b: f64) -> bool {
    (a - b).abs() <= DISTANCE_TOLERANCE * a.abs().max(b.abs())
}

/// All four metrics for one graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentralityScores {
    pub degree: HashMap<String, usize>,
    pub weighted_degree: HashMap<String, f64>,
    pub betweenness: HashMap<String, f64>,
    pub closeness: HashMap<String, f64>,
}

impl CentralityScores {
    #[must_use]
    #[instrument(skip(g), fields(nodes = g.node_count()))]
    pub fn compute(g: &CollabGraph) -> Self {
        let scores = Self {
            degree: degree_centrality(g),
            weighted_degree: weighted_degree(g),
            betweenness: betweenness_centrality(g),
            closeness: closeness_centrality(g),
        };
        debug!("computed centrality metrics");
        scores
    }

    /// Degree of `name`, 0 if absent.
    #[must_use]
    pub fn degree(&self, name: &str) -> usize {
        self.degree.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn weighted_degree(&self, name: &str) -> f64 {
        self.weighted_degree.get(name).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn betweenness(&self, name: &str) -> f64 {
        self.betweenness.get(name).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn closeness(&self, name: &str) -> f64 {
        self.closeness.get(name).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_decreasing_in_weight() {
        assert!(distance(2.0) < distance(1.0));
        assert!((distance(4.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn same_distance_absorbs_rounding() {
        let thirds = distance(3.0) + distance(3.0) + distance(3.0);
        assert!(same_distance(thirds, 1.0));
        assert!(!same_distance(1.0, 1.0 + 1e-9));
    }

    #[test]
    fn same_distance_is_relative_at_every_scale() {
        assert!(!same_distance(1.0, 1.0 + 1e-13));
        assert!(!same_distance(1e-13, 2e-13));
        assert!(same_distance(1e-13, 1e-13 * (1.0 + f64::EPSILON)));
        assert!(same_distance(0.0, 0.0));
    }

    #[test]
    fn missing_names_score_zero() {
        let scores = CentralityScores::default();
        assert_eq!(scores.degree("Nobody"), 0);
        assert!(scores.weighted_degree("Nobody").abs() < f64::EPSILON);
        assert!(scores.betweenness("Nobody").abs() < f64::EPSILON);
        assert!(scores.closeness("Nobody").abs() < f64::EPSILON);
    }
}
