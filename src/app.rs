use std::io::Write;

use crate::cli::CliArgs;
use crate::error::LoadError;
use crate::processing::report::Report;
use crate::state::dataset::Dataset;

/// Why a run ended without a report.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Load the input, compute the metrics and write the report to `out`.
///
/// A failed load ends the run unless `lenient` is set, in which case a
/// diagnostic is logged and the report covers the empty dataset.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> Result<Report, RunError> {
    let mut dataset = Dataset::new();

    match dataset.load(&args.path, args.malformed_policy()) {
        Ok(count) => tracing::debug!("Dataset holds {count} values"),
        Err(e) if args.lenient => {
            tracing::error!("Failed to load data ({}): {e}", e.kind());
        }
        Err(e) => return Err(e.into()),
    }

    let report = Report::from_dataset(&dataset);
    out.write_all(report.render(args.format)?.as_bytes())?;
    out.flush()?;
    Ok(report)
}
