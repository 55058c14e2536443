pub mod analyze;
pub mod completions;
pub mod stats;

use collabnet_core::config::AnalysisConfig;
use collabnet_core::pipeline::{Summary, summarize, summarize_credits};
use tracing::debug;

use crate::input::{Input, InputArgs};
use crate::output::{CliError, OutputMode, render_error};

/// Load input and config, then build and summarize the graph.
///
/// Library errors are rendered with their error code before being returned.
pub(crate) fn load_summary(
    input: &InputArgs,
    limit: Option<usize>,
    output: OutputMode,
) -> anyhow::Result<(Summary, AnalysisConfig)> {
    let mut config = AnalysisConfig::discover(input.config.as_deref())?;
    if let Some(limit) = limit {
        config.report.limit = limit;
    }
    debug!(?config, "effective config");

    let result = match input.load()? {
        Input::Records(records) => summarize(records, &config),
        Input::Credits(credits) => summarize_credits(&credits, &config),
    };

    match result {
        Ok(summary) => Ok((summary, config)),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            Err(err.into())
        }
    }
}
