//! Streaming ingestion of station locations.
//!
//! A producer task pulls raw rows from a [`RowSource`] and hands them over
//! an ordered queue; the consumer skips the header row and parses the rest.
//! Source failures travel on a separate set-once completion slot, checked
//! only once every queued row has been consumed.

mod error;
mod reader;
mod source;
mod stream;

pub use error::{IngestError, SourceError};
pub use reader::{Ingested, LocationReader, load_locations};
pub use source::{CsvSource, MemorySource, Row, RowSource, SourceRow};
pub use stream::RowStream;
