//! Raw collaboration input.
//!
//! A [`CollaborationRecord`] is one "artist A worked with artist B" fact as
//! handed over by a collector. Collectors that see whole recordings instead
//! of pairs can describe them as [`CreditedRecording`]s and let
//! [`expand_credits`] fan them out into records relative to the seed artist.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical::canonicalize;

/// One pairwise collaboration fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRecord {
    #[serde(alias = "artist_1")]
    pub artist_a: String,
    #[serde(alias = "artist_2")]
    pub artist_b: String,
    pub weight: f64,
    /// Release year of the underlying recording, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl CollaborationRecord {
    pub fn new(artist_a: impl Into<String>, artist_b: impl Into<String>, weight: f64) -> Self {
        Self {
            artist_a: artist_a.into(),
            artist_b: artist_b.into(),
            weight,
            year: None,
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

// ---------------------------------------------------------------------------
// Collaboration kinds
// ---------------------------------------------------------------------------

/// How two artists appear together on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationKind {
    /// Title credits a featured artist (`"feat."`, `"featuring"`).
    Featuring,
    /// Title joins the names (`"&"`, `"with"`).
    Joint,
    /// Shared credit with no marker in the title.
    Album,
}

impl CollaborationKind {
    /// Classify a track by its title. The check is case-insensitive and
    /// `Featuring` wins over `Joint`.
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("feat") {
            Self::Featuring
        } else if title.contains('&') || title.contains("with") {
            Self::Joint
        } else {
            Self::Album
        }
    }
}

/// Record weight assigned to each [`CollaborationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindWeights {
    #[serde(default = "default_featuring")]
    pub featuring: f64,
    #[serde(default = "default_joint")]
    pub joint: f64,
    #[serde(default = "default_album")]
    pub album: f64,
}

impl KindWeights {
    #[must_use]
    pub const fn weight(&self, kind: CollaborationKind) -> f64 {
        match kind {
            CollaborationKind::Featuring => self.featuring,
            CollaborationKind::Joint => self.joint,
            CollaborationKind::Album => self.album,
        }
    }
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            featuring: default_featuring(),
            joint: default_joint(),
            album: default_album(),
        }
    }
}

const fn default_featuring() -> f64 {
    3.0
}

const fn default_joint() -> f64 {
    2.0
}

const fn default_album() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Credited recordings
// ---------------------------------------------------------------------------

/// A recording as seen while walking a seed artist's catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditedRecording {
    /// The artist whose catalogue produced this recording.
    pub seed: String,
    pub title: String,
    /// Every credited artist, usually including the seed.
    pub artists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Fan credited recordings out into pairwise records.
///
/// Each recording with at least two credited artists yields one record per
/// credited artist other than the seed, weighted by the title's
/// [`CollaborationKind`]. Seed identity is compared on canonical names.
#[must_use]
pub fn expand_credits(credits: &[CreditedRecording], weights: &KindWeights) -> Vec<CollaborationRecord> {
    let mut records = Vec::new();

    for credit in credits {
        if credit.artists.len() < 2 {
            continue;
        }

        let seed = canonicalize(&credit.seed);
        let weight = weights.weight(CollaborationKind::classify(&credit.title));

        for other in &credit.artists {
            if canonicalize(other) == seed {
                continue;
            }
            records.push(CollaborationRecord {
                artist_a: credit.seed.clone(),
                artist_b: other.clone(),
                weight,
                year: credit.year,
            });
        }
    }

    debug!(
        recordings = credits.len(),
        records = records.len(),
        "expanded credited recordings"
    );
    records
}

// ---------------------------------------------------------------------------
// Year window
// ---------------------------------------------------------------------------

/// Inclusive release-year window.
///
/// An unbounded window keeps every record. A window with at least one bound
/// drops records whose year is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    #[serde(default)]
    pub min_year: Option<i32>,
    #[serde(default)]
    pub max_year: Option<i32>,
}

impl YearWindow {
    #[must_use]
    pub const fn new(min_year: Option<i32>, max_year: Option<i32>) -> Self {
        Self { min_year, max_year }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min_year.is_none() && self.max_year.is_none()
    }

    /// `true` if a record with this year survives the window.
    #[must_use]
    pub fn contains(&self, year: Option<i32>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(year) = year else {
            return false;
        };
        self.min_year.is_none_or(|min| year >= min) && self.max_year.is_none_or(|max| year <= max)
    }

    /// Keep the records inside the window. Returns the survivors and the
    /// number of records dropped.
    #[must_use]
    pub fn apply(&self, records: Vec<CollaborationRecord>) -> (Vec<CollaborationRecord>, usize) {
        let before = records.len();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|r| self.contains(r.year))
            .collect();
        let dropped = before - kept.len();
        (kept, dropped)
    }
}
