#![forbid(unsafe_code)]
//! collabnet-core library.
//!
//! Turns pairwise "artist collaborated with artist" records into a weighted
//! undirected graph and ranks every artist by degree, weighted degree,
//! betweenness and closeness.
//!
//! # Conventions
//!
//! - **Errors**: graph stages return [`error::CollabError`]; config loading
//!   uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod aggregate;
pub mod canonical;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod report;

pub use aggregate::{EdgeSet, PairKey, aggregate};
pub use canonical::canonicalize;
pub use config::AnalysisConfig;
pub use error::{CollabError, ErrorCode};
pub use graph::{CollabGraph, GraphStats};
pub use metrics::CentralityScores;
pub use pipeline::{Analysis, Summary, analyze, analyze_credits, summarize, summarize_credits};
pub use record::{CollaborationKind, CollaborationRecord, CreditedRecording, KindWeights, YearWindow};
pub use report::{MetricsRow, assemble, top};
