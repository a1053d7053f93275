//! Row consumer: header handling and location parsing.

use tracing::{info, trace, warn};

use crate::config::{IngestOptions, RowPolicy};
use crate::domain::StationLocation;
use crate::parser::parse_location;

use super::error::IngestError;
use super::source::{Row, RowSource};
use super::stream::RowStream;

/// Parses locations off a [`RowStream`].
///
/// The first row is kept as the header and never parsed. Bad rows either
/// abort (fail-fast) or are counted and skipped, per [`RowPolicy`].
pub struct LocationReader {
    stream: RowStream,
    options: IngestOptions,
    header: Option<Row>,
    skipped: usize,
}

impl LocationReader {
    /// Wrap a row stream.
    pub fn new(stream: RowStream, options: IngestOptions) -> Self {
        Self {
            stream,
            options,
            header: None,
            skipped: 0,
        }
    }

    /// The header row, once it has been consumed.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Number of data rows skipped as invalid.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Next parsed location.
    ///
    /// Returns `None` when the stream is exhausted. Under
    /// [`RowPolicy::FailFast`] a bad row comes back as `Some(Err(..))`.
    pub async fn next_location(&mut self) -> Option<Result<StationLocation, IngestError>> {
        loop {
            let row = self.stream.next_row().await?;

            if self.header.is_none() {
                info!(headers = ?row.fields, "header row");
                self.header = Some(row.fields);
                continue;
            }

            match parse_location(row.fields.as_slice(), self.options.coordinates) {
                Ok(location) => {
                    trace!(line = row.line, %location, "parsed location");
                    return Some(Ok(location));
                }
                Err(err) if self.options.rows == RowPolicy::SkipInvalid => {
                    warn!(line = row.line, error = %err, "skipping invalid row");
                    self.skipped += 1;
                }
                Err(err) => {
                    return Some(Err(IngestError::Parse {
                        line: row.line,
                        source: err,
                    }));
                }
            }
        }
    }

    /// Check how the producer finished. Call after `next_location` returns `None`.
    pub async fn finish(self) -> Result<(), IngestError> {
        self.stream.finish().await.map_err(IngestError::from)
    }
}

/// Locations read from a source, with the header and skip count.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub header: Option<Row>,
    pub locations: Vec<StationLocation>,
    pub skipped: usize,
}

/// Read every location from `source`.
///
/// Errors are terminal: the first parse error (fail-fast) or any source
/// error ends the run. Source errors are only reported after all rows
/// produced before them have been consumed.
pub async fn load_locations<S: RowSource>(
    source: S,
    options: IngestOptions,
) -> Result<Ingested, IngestError> {
    let mut reader = LocationReader::new(RowStream::spawn(source), options);

    let mut locations = Vec::new();
    while let Some(location) = reader.next_location().await {
        locations.push(location?);
    }

    let header = reader.header().map(<[String]>::to_vec);
    let skipped = reader.skipped();
    reader.finish().await?;

    info!(count = locations.len(), skipped, "records received");

    Ok(Ingested {
        header,
        locations,
        skipped,
    })
}
