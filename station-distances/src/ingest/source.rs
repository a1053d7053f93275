//! Row sources.

use std::fs::File;
use std::path::PathBuf;

use super::error::SourceError;

/// One raw record: an ordered list of string fields.
pub type Row = Vec<String>;

/// A raw record together with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub line: u64,
    pub fields: Row,
}

/// Supplier of raw rows.
///
/// The first row yielded is treated as a header. Opening and reading may
/// block on I/O; both happen on the producer task.
pub trait RowSource: Send + 'static {
    /// Iterator over the rows of an opened source.
    type Rows: Iterator<Item = Result<SourceRow, SourceError>>;

    /// Human-readable origin, used in logs.
    fn origin(&self) -> String;

    /// Open the source for reading.
    fn open(self) -> Result<Self::Rows, SourceError>;
}

/// Delimited text file read with the `csv` crate.
///
/// Rows may have differing field counts; short rows are left for the
/// parser to reject. Blank lines are skipped, but every row keeps the file
/// line it was read from.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    /// Comma-delimited file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl RowSource for CsvSource {
    type Rows = CsvRows;

    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn open(self) -> Result<CsvRows, SourceError> {
        let file = File::open(&self.path).map_err(|e| SourceError::open(self.origin(), e))?;

        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(file)
            .into_records();

        Ok(CsvRows { records, count: 0 })
    }
}

/// Rows of an opened [`CsvSource`].
pub struct CsvRows {
    records: csv::StringRecordsIntoIter<File>,
    /// Records read so far; the fallback line when the reader has no position.
    count: u64,
}

impl Iterator for CsvRows {
    type Item = Result<SourceRow, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.count += 1;
        let fallback = self.count;

        Some(match record {
            Ok(record) => Ok(SourceRow {
                line: record.position().map_or(fallback, |p| p.line()),
                fields: record.iter().map(str::to_owned).collect(),
            }),
            Err(e) => {
                let line = e.position().map_or(fallback, |p| p.line());
                Err(SourceError::read(line, e))
            }
        })
    }
}

/// In-memory row source, optionally failing on open or after its rows.
///
/// Row `i` (zero-based) is reported on line `i + 1`.
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: Vec<Row>,
    open_failure: Option<String>,
    read_failure: Option<String>,
}

impl MemorySource {
    /// Source yielding `rows` in order, header first.
    pub fn new<R, F>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            ..Self::default()
        }
    }

    /// Source that cannot be opened.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            open_failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Fail with a read error once every row has been yielded.
    pub fn fail_after_rows(mut self, message: impl Into<String>) -> Self {
        self.read_failure = Some(message.into());
        self
    }
}

impl RowSource for MemorySource {
    type Rows = Box<dyn Iterator<Item = Result<SourceRow, SourceError>>>;

    fn origin(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }

    fn open(self) -> Result<Self::Rows, SourceError> {
        let origin = self.origin();
        if let Some(message) = self.open_failure {
            return Err(SourceError::open(origin, message));
        }

        let failure_line = self.rows.len() as u64 + 1;
        let failure = self
            .read_failure
            .map(|message| Err(SourceError::read(failure_line, message)));

        let rows = self
            .rows
            .into_iter()
            .zip(1..)
            .map(|(fields, line)| Ok(SourceRow { line, fields }));
        Ok(Box::new(rows.chain(failure)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn collect<S: RowSource>(source: S) -> Vec<Result<SourceRow, SourceError>> {
        source.open().unwrap().collect()
    }

    fn read_all<S: RowSource>(source: S) -> Vec<SourceRow> {
        collect(source).into_iter().map(Result::unwrap).collect()
    }

    #[test]
    fn csv_reads_all_rows_including_header() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,lat,lon").unwrap();
        writeln!(file, "Alpha,40.7128,-74.0060").unwrap();
        writeln!(file, "Beta, 51.5, -0.12").unwrap();

        let rows = read_all(CsvSource::new(file.path()));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].fields, vec!["name", "lat", "lon"]);
        assert_eq!(rows[1].fields, vec!["Alpha", "40.7128", "-74.0060"]);
        assert_eq!(rows[2].fields, vec!["Beta", " 51.5", " -0.12"]);
    }

    #[test]
    fn csv_lines_account_for_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name,lat,lon\nA,0,0\n\n\nBeta,abc,1\n").unwrap();

        let rows = read_all(CsvSource::new(file.path()));
        let lines: Vec<u64> = rows.iter().map(|r| r.line).collect();

        assert_eq!(lines, vec![1, 2, 5]);
        assert_eq!(rows[2].fields, vec!["Beta", "abc", "1"]);
    }

    #[test]
    fn csv_allows_ragged_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,lat,lon").unwrap();
        writeln!(file, "Short").unwrap();
        writeln!(file, "Long,1,2,extra").unwrap();

        let rows = read_all(CsvSource::new(file.path()));

        assert_eq!(rows[1].fields, vec!["Short"]);
        assert_eq!(rows[2].fields.len(), 4);
    }

    #[test]
    fn csv_custom_delimiter() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name\tlat\tlon").unwrap();
        writeln!(file, "Gamma\t1.5\t2.5").unwrap();

        let rows = read_all(CsvSource::new(file.path()).with_delimiter(b'\t'));

        assert_eq!(rows[1].fields, vec!["Gamma", "1.5", "2.5"]);
    }

    #[test]
    fn csv_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvSource::new(dir.path().join("missing.csv"));
        assert!(matches!(source.open(), Err(SourceError::Open { .. })));
    }

    #[test]
    fn csv_invalid_utf8_is_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name,lat,lon\n").unwrap();
        file.write_all(b"\xff\xfe,1,2\n").unwrap();

        let rows = collect(CsvSource::new(file.path()));
        assert!(rows[0].is_ok());
        assert!(matches!(rows[1], Err(SourceError::Read { line: 2, .. })));
    }

    #[test]
    fn memory_yields_rows_then_failure() {
        let source =
            MemorySource::new([["h1", "h2", "h3"], ["a", "1", "2"]]).fail_after_rows("boom");
        let rows = collect(source);

        assert_eq!(rows.len(), 3);
        let header = rows[0].as_ref().unwrap();
        assert_eq!(header.line, 1);
        assert_eq!(header.fields, vec!["h1", "h2", "h3"]);
        assert_eq!(rows[1].as_ref().unwrap().line, 2);
        assert!(matches!(rows[2], Err(SourceError::Read { line: 3, .. })));
    }

    #[test]
    fn memory_unavailable() {
        let source = MemorySource::unavailable("offline");
        assert!(matches!(source.open(), Err(SourceError::Open { .. })));
    }
}
