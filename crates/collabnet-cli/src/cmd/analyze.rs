//! `collabnet analyze` — rank artists by collaboration metrics.

use std::io::{self, Write};

use clap::Args;
use collabnet_core::pipeline::Analysis;
use collabnet_core::report::MetricsRow;
use serde::Serialize;

use crate::input::InputArgs;
use crate::output::{
    CliError, OutputMode, pretty_kv, pretty_rule, pretty_section, render_error, render_mode,
};

/// Arguments for `collabnet analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show at most N rows (0 shows every artist). Overrides `[report] limit`.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Report payload for `collabnet analyze`.
#[derive(Debug, Serialize)]
pub struct RankingReport {
    pub top: MetricsRow,
    pub artists: usize,
    pub collaborations: usize,
    pub filtered_out: usize,
    pub self_pairs: usize,
    pub ranking: Vec<MetricsRow>,
}

/// Execute `collabnet analyze`.
pub fn run_analyze(args: &AnalyzeArgs, output: OutputMode) -> anyhow::Result<()> {
    let (summary, config) = super::load_summary(&args.input, args.limit, output)?;
    let analysis = Analysis::from_summary(summary);

    let top = match analysis.top() {
        Ok(row) => row.clone(),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            return Err(err.into());
        }
    };

    let limit = if config.report.limit == 0 {
        analysis.rows.len()
    } else {
        config.report.limit
    };

    let report = RankingReport {
        top,
        artists: analysis.stats.node_count,
        collaborations: analysis.stats.edge_count,
        filtered_out: analysis.filtered_out,
        self_pairs: analysis.self_pairs,
        ranking: analysis.rows.into_iter().take(limit).collect(),
    };

    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &RankingReport, w: &mut dyn Write) -> io::Result<()> {
    for (rank, row) in report.ranking.iter().enumerate() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            rank + 1,
            row.artist,
            row.degree,
            row.weighted_degree,
            row.betweenness,
            row.closeness
        )?;
    }
    Ok(())
}

fn render_pretty(report: &RankingReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Collaboration ranking")?;
    writeln!(
        w,
        "{:>4}  {:<28} {:>6} {:>9} {:>12} {:>9}",
        "#", "ARTIST", "DEGREE", "WEIGHTED", "BETWEENNESS", "CLOSENESS"
    )?;
    for (rank, row) in report.ranking.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:<28} {:>6} {:>9.2} {:>12.3} {:>9.4}",
            rank + 1,
            truncate(&row.artist, 28),
            row.degree,
            row.weighted_degree,
            row.betweenness,
            row.closeness
        )?;
    }
    pretty_rule(w)?;
    pretty_kv(
        w,
        "Top artist",
        format!("{} ({:.2})", report.top.artist, report.top.weighted_degree),
    )?;
    pretty_kv(w, "Artists", report.artists.to_string())?;
    pretty_kv(w, "Collaborations", report.collaborations.to_string())?;
    if report.filtered_out > 0 {
        pretty_kv(w, "Filtered out", report.filtered_out.to_string())?;
    }
    if report.self_pairs > 0 {
        pretty_kv(w, "Self pairs", report.self_pairs.to_string())?;
    }
    Ok(())
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut out: String = name.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
