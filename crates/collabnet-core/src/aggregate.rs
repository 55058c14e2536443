//! Edge aggregation: raw records to one weighted edge per unordered pair.
//!
//! # Overview
//!
//! Collectors emit the same relationship many times and in both directions
//! (`(A, B)` from A's catalogue, `(B, A)` from B's). The aggregator:
//!
//! 1. canonicalizes both endpoints,
//! 2. skips self-pairs (`A` with `A` after canonicalization),
//! 3. keys the pair by its two names in ascending order ([`PairKey`]),
//! 4. sums weights per key.
//!
//! The result is independent of record order: totals are sums, record counts
//! are counts, and the earliest year is a minimum.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::canonical::canonicalize;
use crate::error::{CollabError, Result, is_valid_weight};
use crate::record::CollaborationRecord;

// ---------------------------------------------------------------------------
// PairKey
// ---------------------------------------------------------------------------

/// An unordered pair of canonical names, stored in ascending order.
///
/// `PairKey::new("B", "A") == PairKey::new("A", "B")`. Construction does not
/// reject equal names; the aggregator never produces them and the graph
/// builder re-checks with [`PairKey::is_self_pair`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PairKey {
    low: String,
    high: String,
}

impl PairKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The lexicographically smaller name.
    #[must_use]
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The lexicographically larger name.
    #[must_use]
    pub fn high(&self) -> &str {
        &self.high
    }

    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }

    /// Both names, in ascending order.
    #[must_use]
    pub fn names(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

// ---------------------------------------------------------------------------
// EdgeSet
// ---------------------------------------------------------------------------

/// Aggregated data for one unordered pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStats {
    /// Sum of all contributing record weights.
    pub weight: f64,
    /// Number of contributing records.
    pub records: usize,
    /// Earliest release year among contributing records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_year: Option<i32>,
}

/// The aggregated edge mapping, ordered by [`PairKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeSet {
    edges: BTreeMap<PairKey, EdgeStats>,
    skipped_self_pairs: usize,
}

impl EdgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an edge set from pre-aggregated weights.
    ///
    /// No validation happens here; [`crate::graph::CollabGraph::build`]
    /// checks every key and weight.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (PairKey, f64)>,
    {
        let edges = weights
            .into_iter()
            .map(|(key, weight)| {
                (
                    key,
                    EdgeStats {
                        weight,
                        records: 1,
                        first_year: None,
                    },
                )
            })
            .collect();
        Self {
            edges,
            skipped_self_pairs: 0,
        }
    }

    fn add(&mut self, key: PairKey, weight: f64, year: Option<i32>) {
        self.edges
            .entry(key)
            .and_modify(|stats| {
                stats.weight += weight;
                stats.records += 1;
                stats.first_year = match (stats.first_year, year) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            })
            .or_insert(EdgeStats {
                weight,
                records: 1,
                first_year: year,
            });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &PairKey) -> Option<&EdgeStats> {
        self.edges.get(key)
    }

    /// Total weight for the pair `{a, b}` given raw names.
    #[must_use]
    pub fn weight_between(&self, a: &str, b: &str) -> Option<f64> {
        self.edges
            .get(&PairKey::new(canonicalize(a), canonicalize(b)))
            .map(|s| s.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &EdgeStats)> {
        self.edges.iter()
    }

    /// The plain `pair -> weight` mapping.
    #[must_use]
    pub fn weights(&self) -> BTreeMap<PairKey, f64> {
        self.edges
            .iter()
            .map(|(k, s)| (k.clone(), s.weight))
            .collect()
    }

    /// Records discarded because both endpoints named the same artist.
    #[must_use]
    pub const fn skipped_self_pairs(&self) -> usize {
        self.skipped_self_pairs
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Aggregate raw records into an [`EdgeSet`].
///
/// Empty input yields an empty set.
///
/// # Errors
///
/// - [`CollabError::InvalidWeight`] if a record's weight is not a finite
///   positive number. The error carries the record's position and names.
/// - [`CollabError::EmptyName`] if an endpoint is blank after
///   canonicalization.
#[instrument(skip(records), fields(records = records.len()))]
pub fn aggregate(records: &[CollaborationRecord]) -> Result<EdgeSet> {
    let mut set = EdgeSet::new();

    for (index, record) in records.iter().enumerate() {
        if !is_valid_weight(record.weight) {
            return Err(CollabError::InvalidWeight {
                index,
                artist_a: record.artist_a.clone(),
                artist_b: record.artist_b.clone(),
                weight: record.weight,
            });
        }

        let a = canonicalize(&record.artist_a);
        let b = canonicalize(&record.artist_b);
        if a.is_empty() || b.is_empty() {
            return Err(CollabError::EmptyName { index });
        }

        if a == b {
            set.skipped_self_pairs += 1;
            continue;
        }

        set.add(PairKey::new(a, b), record.weight, record.year);
    }

    debug!(
        edges = set.len(),
        skipped_self_pairs = set.skipped_self_pairs,
        "aggregated collaboration records"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(a: &str, b: &str, w: f64) -> CollaborationRecord {
        CollaborationRecord::new(a, b, w)
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("B", "A"), PairKey::new("A", "B"));
        let key = PairKey::new("Teoman", "Duman");
        assert_eq!(key.names(), ("Duman", "Teoman"));
        assert!(!key.is_self_pair());
        assert!(PairKey::new("X", "X").is_self_pair());
    }

    #[test]
    fn empty_input_is_empty_set() {
        let set = aggregate(&[]).expect("aggregate");
        assert!(set.is_empty());
        assert_eq!(set.skipped_self_pairs(), 0);
    }

    #[test]
    fn both_directions_merge() {
        let set = aggregate(&[rec("A", "B", 2.0), rec("b", "a", 3.0)]).expect("aggregate");
        assert_eq!(set.len(), 1);
        let stats = set.get(&PairKey::new("A", "B")).expect("edge");
        assert!((stats.weight - 5.0).abs() < f64::EPSILON);
        assert_eq!(stats.records, 2);
    }

    #[test]
    fn self_pairs_after_canonicalization_are_skipped() {
        let set = aggregate(&[rec("Cem Karaca", "cem   karaca", 1.0)]).expect("aggregate");
        assert!(set.is_empty());
        assert_eq!(set.skipped_self_pairs(), 1);
    }

    #[test]
    fn earliest_year_is_kept() {
        let set = aggregate(&[
            rec("A", "B", 1.0).with_year(1988),
            rec("B", "A", 1.0),
            rec("A", "B", 1.0).with_year(1974),
        ])
        .expect("aggregate");
        let stats = set.get(&PairKey::new("A", "B")).expect("edge");
        assert_eq!(stats.first_year, Some(1974));
        assert_eq!(stats.records, 3);
    }

    #[test]
    fn invalid_weight_names_the_record() {
        let err = aggregate(&[rec("A", "B", 1.0), rec("C", "D", 0.0)]).expect_err("zero weight");
        assert_eq!(
            err,
            CollabError::InvalidWeight {
                index: 1,
                artist_a: "C".to_string(),
                artist_b: "D".to_string(),
                weight: 0.0,
            }
        );
        assert!(aggregate(&[rec("A", "B", f64::NAN)]).is_err());
        assert!(aggregate(&[rec("A", "B", -3.0)]).is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = aggregate(&[rec("  ", "B", 1.0)]).expect_err("blank");
        assert_eq!(err, CollabError::EmptyName { index: 0 });
    }

    #[test]
    fn weight_between_canonicalizes_lookup() {
        let set = aggregate(&[rec("Barış Manço", "Kurtalan Ekspres", 4.0)]).expect("aggregate");
        assert_eq!(set.weight_between("kurtalan ekspres", " barış  manço"), Some(4.0));
        assert_eq!(set.weight_between("Barış Manço", "Moğollar"), None);
    }
}
