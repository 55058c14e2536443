//! Rendering for `collabnet` reports.
//!
//! `analyze` and `stats` build one serializable payload each and hand it to
//! [`render_mode`] with a text and a pretty renderer. Text mode is one record
//! per line with tab-separated fields, so rankings pipe into `cut` or
//! `sort -t$'\t'`. JSON mode prints the payload itself.
//!
//! The mode comes from `--format`, then the hidden `--json`, then the
//! `FORMAT` environment variable. Without any of those a terminal gets
//! [`OutputMode::Pretty`] and a pipe gets [`OutputMode::Text`].

use clap::ValueEnum;
use collabnet_core::error::CollabError;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Width of the rule under section headings and rankings.
pub const PRETTY_RULE_WIDTH: usize = 72;

pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(PRETTY_RULE_WIDTH))
}

/// Heading line followed by a rule.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// `Label:` padded to a fixed column, then the value.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<16} {}", format!("{key}:"), value.as_ref())
}

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Aligned ranking table with a summary block.
    Pretty,
    /// Tab-separated fields, one artist or stat per line.
    Text,
    /// The report payload as JSON.
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Parse a `FORMAT` value. Unrecognized values are ignored.
    fn from_env_value(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    let tty_default = if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    };

    format_flag
        .or_else(|| json_flag.then_some(OutputMode::Json))
        .or_else(|| format_env.and_then(OutputMode::from_env_value))
        .unwrap_or(tty_default)
}

/// Pick the output mode for this run from flags, `FORMAT` and stdout.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let format_env = std::env::var("FORMAT").ok();
    resolve_output_mode_inner(
        format_flag,
        json_flag,
        format_env.as_deref(),
        io::stdout().is_terminal(),
    )
}

/// Write `value` to stdout in `mode`.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// An analysis failure as shown to the user: message, hint and `E####` code.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Code from [`collabnet_core::ErrorCode`], e.g. `"E1002"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&CollabError> for CliError {
    fn from(err: &CollabError) -> Self {
        let code = err.code();
        Self {
            message: err.to_string(),
            suggestion: code.hint().map(ToString::to_string),
            error_code: Some(code.code().to_string()),
        }
    }
}

/// Write `error` to stderr, wrapped as `{"error": ...}` in JSON mode.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let mut out = io::stderr().lock();
    if mode.is_json() {
        let wrapper = serde_json::json!({
            "error": error,
        });
        serde_json::to_writer_pretty(&mut out, &wrapper)?;
        writeln!(out)?;
    } else {
        writeln!(out, "error: {}", error.message)?;
        if let Some(ref suggestion) = error.suggestion {
            writeln!(out, "  suggestion: {suggestion}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_format_flag_wins_over_json_and_env() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_json_flag_wins_over_env() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_format_env_case_insensitive() {
        let mode = resolve_output_mode_inner(None, false, Some("TEXT"), false);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_format_env_unknown_falls_through_to_tty() {
        let mode_tty = resolve_output_mode_inner(None, false, Some("fancy"), true);
        assert_eq!(mode_tty, OutputMode::Pretty);
        let mode_pipe = resolve_output_mode_inner(None, false, Some("fancy"), false);
        assert_eq!(mode_pipe, OutputMode::Text);
    }

    #[test]
    fn collab_error_carries_code_and_hint() {
        let err = CliError::from(&CollabError::EmptyGraph);
        assert_eq!(err.error_code.as_deref(), Some("E3001"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn cli_error_json_skips_missing_fields() {
        let err = CliError::from(&CollabError::MalformedEdge {
            name: "Duman".to_string(),
        });
        let json = serde_json::to_value(&err).expect("serialize");
        assert!(json.get("suggestion").is_none());
        assert_eq!(json["error_code"], "E2001");
    }

    #[test]
    fn resolve_defaults_without_flags_or_env() {
        assert_eq!(resolve_output_mode_inner(None, false, None, true), OutputMode::Pretty);
        assert_eq!(resolve_output_mode_inner(None, false, None, false), OutputMode::Text);
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("json"), false),
            OutputMode::Json
        );
    }

    #[test]
    fn pretty_rule_has_fixed_width() {
        let mut buf = Vec::new();
        pretty_rule(&mut buf).expect("write");
        assert_eq!(buf.len(), PRETTY_RULE_WIDTH + 1);
    }
}
