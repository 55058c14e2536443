//! `collabnet stats` — graph summary.

use std::io::{self, Write};

use clap::Args;
use collabnet_core::graph::GraphStats;

use crate::input::InputArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `collabnet stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute `collabnet stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let (summary, _) = super::load_summary(&args.input, None, output)?;
    render_mode(output, &summary.stats, render_text, render_pretty)
}

fn render_text(stats: &GraphStats, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "nodes\t{}", stats.node_count)?;
    writeln!(w, "edges\t{}", stats.edge_count)?;
    writeln!(w, "density\t{}", stats.density)?;
    writeln!(w, "components\t{}", stats.component_count)?;
    writeln!(w, "total_weight\t{}", stats.total_weight)?;
    writeln!(w, "max_degree\t{}", stats.max_degree)?;
    writeln!(w, "content_hash\t{}", stats.content_hash)
}

fn render_pretty(stats: &GraphStats, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Collaboration graph")?;
    pretty_kv(w, "Artists", stats.node_count.to_string())?;
    pretty_kv(w, "Collaborations", stats.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", stats.density))?;
    pretty_kv(w, "Components", stats.component_count.to_string())?;
    pretty_kv(w, "Total weight", format!("{:.2}", stats.total_weight))?;
    pretty_kv(w, "Max degree", stats.max_degree.to_string())?;
    pretty_kv(w, "Content hash", &stats.content_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> GraphStats {
        GraphStats {
            node_count: 3,
            edge_count: 2,
            density: 2.0 / 3.0,
            component_count: 1,
            total_weight: 4.0,
            max_degree: 2,
            content_hash: "blake3:abc".to_string(),
        }
    }

    #[test]
    fn text_is_key_tab_value() {
        let mut buf = Vec::new();
        render_text(&stats(), &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("nodes\t3\n"));
        assert!(text.contains("max_degree\t2\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn pretty_rounds_density() {
        let mut buf = Vec::new();
        render_pretty(&stats(), &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("0.6667"));
        assert!(text.contains("blake3:abc"));
    }
}
