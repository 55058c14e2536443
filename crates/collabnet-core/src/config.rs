use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::is_valid_weight;
use crate::record::{KindWeights, YearWindow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub filter: YearWindow,
    #[serde(default)]
    pub weights: KindWeights,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows shown by the ranking report.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

const fn default_limit() -> usize {
    20
}

impl AnalysisConfig {
    /// Load a config file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error on TOML syntax or schema errors, or when a
    /// `[weights]` entry is not a finite positive number.
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let weights = [
            ("featuring", self.weights.featuring),
            ("joint", self.weights.joint),
            ("album", self.weights.album),
        ];
        for (field, weight) in weights {
            anyhow::ensure!(
                is_valid_weight(weight),
                "weights.{field} must be a finite number greater than 0, got {weight}"
            );
        }
        Ok(())
    }

    /// Resolve the effective config: an explicit path wins, then
    /// `<config dir>/collabnet/config.toml`, then the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved file cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match user_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// `<config dir>/collabnet/config.toml`, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("collabnet/config.toml"))
}
