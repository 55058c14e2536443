//! Ranking table: one row of metrics per artist.
//!
//! Rows are ordered by weighted degree, highest first, with ties broken by
//! canonical name ascending so the same graph always yields the same table.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::{CollabError, Result};
use crate::graph::build::CollabGraph;
use crate::metrics::CentralityScores;

/// Per-artist metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub artist: String,
    pub degree: usize,
    pub weighted_degree: f64,
    /// Unnormalized weighted betweenness.
    pub betweenness: f64,
    pub closeness: f64,
}

/// Join per-node metrics into a ranked table.
///
/// Every node of `g` gets a row; a node missing from one of the maps scores
/// 0 for that metric.
#[must_use]
pub fn assemble(
    g: &CollabGraph,
    degree: &HashMap<String, usize>,
    weighted_degree: &HashMap<String, f64>,
    betweenness: &HashMap<String, f64>,
    closeness: &HashMap<String, f64>,
) -> Vec<MetricsRow> {
    let mut rows: Vec<MetricsRow> = g
        .names()
        .map(|name| MetricsRow {
            artist: name.to_string(),
            degree: degree.get(name).copied().unwrap_or(0),
            weighted_degree: weighted_degree.get(name).copied().unwrap_or(0.0),
            betweenness: betweenness.get(name).copied().unwrap_or(0.0),
            closeness: closeness.get(name).copied().unwrap_or(0.0),
        })
        .collect();

    rows.sort_by(rank_order);
    rows
}

/// [`assemble`] over a [`CentralityScores`] bundle.
#[must_use]
pub fn assemble_scores(g: &CollabGraph, scores: &CentralityScores) -> Vec<MetricsRow> {
    assemble(
        g,
        &scores.degree,
        &scores.weighted_degree,
        &scores.betweenness,
        &scores.closeness,
    )
}

/// The highest-ranked row.
///
/// # Errors
///
/// Returns [`CollabError::EmptyGraph`] if `rows` is empty.
pub fn top(rows: &[MetricsRow]) -> Result<&MetricsRow> {
    rows.first().ok_or(CollabError::EmptyGraph)
}

/// Weighted degree descending, then artist ascending.
fn rank_order(a: &MetricsRow, b: &MetricsRow) -> Ordering {
    b.weighted_degree
        .total_cmp(&a.weighted_degree)
        .then_with(|| a.artist.cmp(&b.artist))
}
