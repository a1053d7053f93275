//! End-to-end run: ingest, pair, report.

use std::io::Write;

use tracing::info;

use crate::config::RunConfig;
use crate::ingest::{CsvSource, IngestError, load_locations};
use crate::report::{DistanceReport, ReportError};

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Reading or parsing the input failed
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing the report failed
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Read the configured input, compute every pair distance and write the report.
pub async fn run<W: Write>(config: &RunConfig, out: W) -> Result<DistanceReport, RunError> {
    info!(input = %config.input.display(), "reading station locations");

    let source = CsvSource::new(&config.input).with_delimiter(config.delimiter);
    let ingested = load_locations(source, config.ingest).await?;

    let report = DistanceReport::compute(ingested);
    report.write_to(config.output, out)?;

    Ok(report)
}
