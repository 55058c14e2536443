//! End-to-end analysis: records in, ranked metrics out.
//!
//! ```text
//! records ─ YearWindow::apply ─ aggregate ─ CollabGraph::build ─ GraphStats
//!         ─ CentralityScores ─ assemble
//! ```
//!
//! [`summarize`] stops after `GraphStats`; [`analyze`] runs everything.

use tracing::{debug, info, instrument, warn};

use crate::aggregate::aggregate;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::graph::{CollabGraph, GraphStats};
use crate::metrics::CentralityScores;
use crate::record::{CollaborationRecord, CreditedRecording, expand_credits};
use crate::report::{MetricsRow, assemble_scores, top};

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: CollabGraph,
    pub stats: GraphStats,
    /// Ranked rows, weighted degree descending.
    pub rows: Vec<MetricsRow>,
    /// Records dropped by the year window.
    pub filtered_out: usize,
    /// Records dropped as self-collaborations.
    pub self_pairs: usize,
}

impl Analysis {
    /// Score every node of a summarized graph and rank the result.
    #[must_use]
    #[instrument(skip(summary), fields(nodes = summary.stats.node_count))]
    pub fn from_summary(summary: Summary) -> Self {
        let scores = CentralityScores::compute(&summary.graph);
        let rows = assemble_scores(&summary.graph, &scores);
        debug!(rows = rows.len(), "ranked artists");

        Self {
            graph: summary.graph,
            stats: summary.stats,
            rows,
            filtered_out: summary.filtered_out,
            self_pairs: summary.self_pairs,
        }
    }

    /// The top-ranked artist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CollabError::EmptyGraph`] when no edges survived.
    pub fn top(&self) -> Result<&MetricsRow> {
        top(&self.rows)
    }
}

/// The graph stage: year filter, aggregate, build. No centrality work.
#[derive(Debug, Clone)]
pub struct Summary {
    pub graph: CollabGraph,
    pub stats: GraphStats,
    /// Records dropped by the year window.
    pub filtered_out: usize,
    /// Records dropped as self-collaborations.
    pub self_pairs: usize,
}

/// Filter, aggregate and build the graph, then summarize it.
///
/// # Errors
///
/// Propagates aggregation and graph-construction errors.
#[instrument(skip(records, config), fields(records = records.len()))]
pub fn summarize(records: Vec<CollaborationRecord>, config: &AnalysisConfig) -> Result<Summary> {
    let (records, filtered_out) = config.filter.apply(records);
    if filtered_out > 0 {
        warn!(
            filtered_out,
            min_year = ?config.filter.min_year,
            max_year = ?config.filter.max_year,
            "dropped records outside the year window"
        );
    }

    let edges = aggregate(&records)?;
    let graph = CollabGraph::build(&edges)?;
    let stats = GraphStats::from_graph(&graph);

    info!(
        nodes = stats.node_count,
        edges = stats.edge_count,
        components = stats.component_count,
        "graph built"
    );

    Ok(Summary {
        graph,
        stats,
        filtered_out,
        self_pairs: edges.skipped_self_pairs(),
    })
}

/// Expand credited recordings with the configured kind weights, then
/// [`summarize`].
///
/// # Errors
///
/// Propagates aggregation and graph-construction errors.
pub fn summarize_credits(credits: &[CreditedRecording], config: &AnalysisConfig) -> Result<Summary> {
    summarize(expand_credits(credits, &config.weights), config)
}

/// Run the full pipeline over pairwise records.
///
/// # Errors
///
/// Propagates aggregation and graph-construction errors.
pub fn analyze(records: Vec<CollaborationRecord>, config: &AnalysisConfig) -> Result<Analysis> {
    summarize(records, config).map(Analysis::from_summary)
}

/// Expand credited recordings with the configured kind weights, then
/// [`analyze`].
///
/// # Errors
///
/// Propagates aggregation and graph-construction errors.
pub fn analyze_credits(credits: &[CreditedRecording], config: &AnalysisConfig) -> Result<Analysis> {
    analyze(expand_credits(credits, &config.weights), config)
}
