//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use station_distances::config::{CoordinatePolicy, IngestOptions, RowPolicy, RunConfig};
use station_distances::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "station-distances")]
#[command(about = "Great-circle distances between every pair of stations.")]
pub struct CommandLine {
    /// Delimited file of `name,latitude,longitude` rows with a header row
    /// [default: locations.csv]
    #[arg(value_name = "INPUT")]
    pub path: Option<PathBuf>,

    /// Input file, as an alternative to the positional argument
    #[arg(short, long, value_name = "INPUT", conflicts_with = "path")]
    pub input: Option<PathBuf>,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Reject empty names, latitudes outside [-90, 90] and longitudes outside [-180, 180]
    #[arg(long)]
    pub strict: bool,

    /// Skip rows that fail to parse instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the run configuration, or explain why the arguments are unusable.
    pub fn into_config(self) -> Result<RunConfig, String> {
        if !self.delimiter.is_ascii() {
            return Err(format!("delimiter must be ASCII, got {:?}", self.delimiter));
        }

        let coordinates = if self.strict {
            CoordinatePolicy::Strict
        } else {
            CoordinatePolicy::Permissive
        };
        let rows = if self.skip_invalid {
            RowPolicy::SkipInvalid
        } else {
            RowPolicy::FailFast
        };

        let input = self
            .input
            .or(self.path)
            .unwrap_or_else(|| RunConfig::default().input);

        Ok(RunConfig::new(input)
            .with_delimiter(self.delimiter as u8)
            .with_ingest(
                IngestOptions::default()
                    .with_coordinates(coordinates)
                    .with_rows(rows),
            )
            .with_output(self.format))
    }
}
