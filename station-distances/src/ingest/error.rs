//! Ingestion error types.

use crate::parser::ParseError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a row source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be opened
    #[error("cannot open {origin}: {source}")]
    Open {
        origin: String,
        #[source]
        source: BoxError,
    },

    /// Reading failed partway through the source
    #[error("failed reading line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: BoxError,
    },

    /// The producer stopped without reporting how it finished
    #[error("row producer exited without signalling completion")]
    ProducerLost,
}

impl SourceError {
    /// Build an open failure from any error.
    pub fn open(origin: impl Into<String>, source: impl Into<BoxError>) -> Self {
        SourceError::Open {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Build a read failure at the given 1-based line.
    pub fn read(line: u64, source: impl Into<BoxError>) -> Self {
        SourceError::Read {
            line,
            source: source.into(),
        }
    }
}

/// Errors that end an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The row source could not be opened
    #[error("row source unavailable: {0}")]
    SourceUnavailable(#[source] SourceError),

    /// A data row failed to parse (fail-fast policy)
    #[error("invalid data on line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: ParseError,
    },

    /// The row source failed after producing zero or more rows
    #[error("row source failed mid-stream: {0}")]
    Stream(#[source] SourceError),
}

impl From<SourceError> for IngestError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Open { .. } => IngestError::SourceUnavailable(err),
            SourceError::Read { .. } | SourceError::ProducerLost => IngestError::Stream(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Coordinate;

    #[test]
    fn error_display() {
        let err = SourceError::open("locations.csv", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "cannot open locations.csv: No such file or directory"
        );

        let err = SourceError::read(4, "unexpected end of input");
        assert_eq!(
            err.to_string(),
            "failed reading line 4: unexpected end of input"
        );

        let err = IngestError::Parse {
            line: 3,
            source: ParseError::InvalidNumber {
                field: Coordinate::Latitude,
                raw: "abc".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid data on line 3: invalid number in latitude (column 1): \"abc\""
        );
    }

    #[test]
    fn source_errors_classify() {
        let err: IngestError = SourceError::open("x", "gone").into();
        assert!(matches!(err, IngestError::SourceUnavailable(_)));

        let err: IngestError = SourceError::read(2, "broken pipe").into();
        assert!(matches!(err, IngestError::Stream(_)));

        let err: IngestError = SourceError::ProducerLost.into();
        assert!(matches!(err, IngestError::Stream(_)));
    }
}
