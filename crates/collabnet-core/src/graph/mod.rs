//! Collaboration graph module.
//!
//! # Overview
//!
//! This module materializes the aggregated edge set as a petgraph undirected
//! graph. The graph feeds every centrality metric and the report.
//!
//! ## Pipeline
//!
//! ```text
//! EdgeSet (PairKey -> EdgeStats)
//!        ↓  build::CollabGraph::build()
//! CollabGraph (UnGraph<String, CollabEdge>)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component count, total weight, …)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use collabnet_core::aggregate::aggregate;
//! use collabnet_core::graph::{CollabGraph, GraphStats};
//! use collabnet_core::record::CollaborationRecord;
//!
//! let records = vec![
//!     CollaborationRecord::new("Cem Karaca", "Apaşlar", 2.0),
//!     CollaborationRecord::new("apaşlar", "cem karaca", 1.0),
//! ];
//! let edges = aggregate(&records)?;
//! let graph = CollabGraph::build(&edges)?;
//! let stats = GraphStats::from_graph(&graph);
//!
//! assert_eq!((stats.node_count, stats.edge_count), (2, 1));
//! # Ok::<(), collabnet_core::error::CollabError>(())
//! ```

pub mod build;
pub mod stats;

pub use build::{CollabEdge, CollabGraph};
pub use stats::GraphStats;
