use std::fmt;

/// Machine-readable error codes surfaced by the CLI and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyName,
    InvalidWeight,
    MalformedEdge,
    InvalidEdgeWeight,
    EmptyGraph,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "E1001",
            Self::InvalidWeight => "E1002",
            Self::MalformedEdge => "E2001",
            Self::InvalidEdgeWeight => "E2002",
            Self::EmptyGraph => "E3001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "Artist name is empty",
            Self::InvalidWeight => "Record weight must be a positive number",
            Self::MalformedEdge => "Edge joins an artist to itself",
            Self::InvalidEdgeWeight => "Edge weight must be a positive number",
            Self::EmptyGraph => "No collaborations to rank",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::EmptyName => Some("Drop records whose artist fields are blank."),
            Self::InvalidWeight => Some("Weights count collaborations; use values greater than 0."),
            Self::MalformedEdge => None,
            Self::InvalidEdgeWeight => Some("Build edges through the aggregator."),
            Self::EmptyGraph => Some("Check the input file and the configured year window."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the graph construction and ranking stages.
///
/// All of them are deterministic for a given input; none is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollabError {
    /// A record endpoint canonicalized to the empty string.
    #[error("record {index}: artist name is empty after normalization")]
    EmptyName { index: usize },

    /// A record carried a weight that is zero, negative, or not finite.
    #[error("record {index} ({artist_a} / {artist_b}): invalid weight {weight}")]
    InvalidWeight {
        index: usize,
        artist_a: String,
        artist_b: String,
        weight: f64,
    },

    /// An edge key names the same artist on both ends.
    #[error("malformed edge: {name} is paired with itself")]
    MalformedEdge { name: String },

    /// An edge reached the graph builder with a non-positive weight.
    #[error("edge {a} / {b}: invalid weight {weight}")]
    InvalidEdgeWeight { a: String, b: String, weight: f64 },

    /// Ranking was requested over an empty table.
    #[error("no collaborations to rank")]
    EmptyGraph,
}

impl CollabError {
    /// The machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyName { .. } => ErrorCode::EmptyName,
            Self::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            Self::MalformedEdge { .. } => ErrorCode::MalformedEdge,
            Self::InvalidEdgeWeight { .. } => ErrorCode::InvalidEdgeWeight,
            Self::EmptyGraph => ErrorCode::EmptyGraph,
        }
    }
}

/// Shorthand for results carrying a [`CollabError`].
pub type Result<T, E = CollabError> = std::result::Result<T, E>;

/// `true` when `weight` can be used as a collaboration strength.
#[must_use]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::EmptyName,
            ErrorCode::InvalidWeight,
            ErrorCode::MalformedEdge,
            ErrorCode::InvalidEdgeWeight,
            ErrorCode::EmptyGraph,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::MalformedEdge.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn invalid_weight_message_names_the_record() {
        let err = CollabError::InvalidWeight {
            index: 4,
            artist_a: "Cem Karaca".to_string(),
            artist_b: "Moğollar".to_string(),
            weight: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("record 4"));
        assert!(msg.contains("Cem Karaca"));
        assert!(msg.contains("Moğollar"));
        assert_eq!(err.code(), ErrorCode::InvalidWeight);
    }

    #[test]
    fn weight_validation() {
        assert!(is_valid_weight(0.5));
        assert!(!is_valid_weight(0.0));
        assert!(!is_valid_weight(-2.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }
}
