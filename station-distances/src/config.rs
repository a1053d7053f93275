//! Run configuration.

use std::path::PathBuf;

use crate::report::OutputFormat;

/// Default input file, read from the working directory.
const DEFAULT_INPUT: &str = "locations.csv";

/// How the parser validates a row once its coordinates parse as numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Accept any finite number (latitude 999 included) and any name.
    #[default]
    Permissive,

    /// Require a non-empty name, latitude in [-90, 90] and longitude in
    /// [-180, 180].
    Strict,
}

/// What ingestion does with a data row that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Abort the whole run on the first bad row.
    #[default]
    FailFast,

    /// Log the bad row, count it, and carry on.
    SkipInvalid,
}

/// Options for turning raw rows into locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Coordinate validation policy.
    pub coordinates: CoordinatePolicy,

    /// Bad row handling policy.
    pub rows: RowPolicy,
}

impl IngestOptions {
    /// Set the coordinate policy.
    pub fn with_coordinates(mut self, coordinates: CoordinatePolicy) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Set the bad row policy.
    pub fn with_rows(mut self, rows: RowPolicy) -> Self {
        self.rows = rows;
        self
    }
}

/// Configuration for a full run: where to read, how to parse, how to report.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the delimited input file.
    pub input: PathBuf,

    /// Field delimiter byte.
    pub delimiter: u8,

    /// Parsing options.
    pub ingest: IngestOptions,

    /// Report format written to the output.
    pub output: OutputFormat,
}

impl RunConfig {
    /// Create a config reading from the given path, with default options.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the ingest options.
    pub fn with_ingest(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    /// Set the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            delimiter: b',',
            ingest: IngestOptions::default(),
            output: OutputFormat::Summary,
        }
    }
}
