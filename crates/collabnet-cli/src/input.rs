//! Input loading: JSON arrays of records or credited recordings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use collabnet_core::record::{CollaborationRecord, CreditedRecording};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Where the collaboration data comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// JSON array of `{artist_a, artist_b, weight, year?}` records.
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// JSON array of `{seed, title, artists, year?}` credited recordings.
    #[arg(long, value_name = "FILE")]
    pub credits: Option<PathBuf>,
}

/// Input source plus the analysis config.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Analysis config (TOML). Defaults to the user config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Parsed input, before any graph work.
#[derive(Debug)]
pub enum Input {
    Records(Vec<CollaborationRecord>),
    Credits(Vec<CreditedRecording>),
}

impl InputArgs {
    /// Read and parse whichever source was given.
    pub fn load(&self) -> Result<Input> {
        if let Some(path) = &self.source.records {
            return Ok(Input::Records(read_json_array(path)?));
        }
        if let Some(path) = &self.source.credits {
            return Ok(Input::Credits(read_json_array(path)?));
        }
        anyhow::bail!("one of --records or --credits is required")
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), items = items.len(), "loaded input");
    Ok(items)
}
