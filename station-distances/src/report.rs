//! Run results and their output formats.

use std::io::Write;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::domain::StationDistance;
use crate::engine::all_pair_distances;
use crate::ingest::{Ingested, Row};

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Header, counts and timing only.
    #[default]
    Summary,
    /// One tab-separated line per pair.
    Tsv,
    /// Full report as a JSON document.
    Json,
}

/// Errors writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct DistanceReport {
    /// The source's header row, if it had one.
    pub header: Option<Row>,

    /// Number of locations parsed successfully.
    pub location_count: usize,

    /// Number of data rows skipped as invalid.
    pub skipped: usize,

    /// Every pair distance, in enumeration order.
    pub distances: Vec<StationDistance>,

    /// Wall-clock time spent computing the distances.
    pub elapsed: Duration,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    header: Option<&'a [String]>,
    location_count: usize,
    skipped_rows: usize,
    pair_count: usize,
    elapsed_secs: f64,
    distances: &'a [StationDistance],
}

impl DistanceReport {
    /// Compute every pair distance for the ingested locations, timing the work.
    pub fn compute(ingested: Ingested) -> Self {
        let start = Instant::now();
        let distances = all_pair_distances(&ingested.locations);
        let elapsed = start.elapsed();

        info!(
            pairs = distances.len(),
            elapsed_secs = elapsed.as_secs_f64(),
            "computed pair distances"
        );

        Self {
            header: ingested.header,
            location_count: ingested.locations.len(),
            skipped: ingested.skipped,
            distances,
            elapsed,
        }
    }

    /// Number of pair distances computed.
    pub fn pair_count(&self) -> usize {
        self.distances.len()
    }

    /// Write the report in the given format.
    pub fn write_to<W: Write>(&self, format: OutputFormat, mut out: W) -> Result<(), ReportError> {
        match format {
            OutputFormat::Summary => self.write_summary(&mut out)?,
            OutputFormat::Tsv => self.write_tsv(&mut out)?,
            OutputFormat::Json => self.write_json(&mut out)?,
        }
        out.flush()?;
        Ok(())
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        if let Some(header) = &self.header {
            writeln!(out, "Headers: {}", header.join(", "))?;
        }
        writeln!(out, "{} records received", self.location_count)?;
        if self.skipped > 0 {
            writeln!(out, "{} invalid rows skipped", self.skipped)?;
        }
        writeln!(
            out,
            "We did {} calculations in {} seconds!",
            self.pair_count(),
            self.elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    fn write_tsv<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        for d in &self.distances {
            writeln!(
                out,
                "{}\t{}\t{:.6}",
                d.first_station, d.second_station, d.distance_km
            )?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let doc = JsonReport {
            header: self.header.as_deref(),
            location_count: self.location_count,
            skipped_rows: self.skipped,
            pair_count: self.pair_count(),
            elapsed_secs: self.elapsed.as_secs_f64(),
            distances: &self.distances,
        };
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        Ok(())
    }
}
