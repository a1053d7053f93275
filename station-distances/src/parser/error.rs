//! Parse error types.

use std::fmt;

/// Which coordinate column a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Coordinate {
    /// Zero-based column index of this coordinate within a row.
    pub fn column(self) -> usize {
        match self {
            Coordinate::Latitude => 1,
            Coordinate::Longitude => 2,
        }
    }

    /// Lower-case field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Coordinate::Latitude => "latitude",
            Coordinate::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (column {})", self.as_str(), self.column())
    }
}

/// Errors from parsing a single data row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Row has fewer than the three required fields
    #[error("malformed row: expected at least 3 fields, found {found}")]
    MalformedRow { found: usize },

    /// Coordinate is not a finite decimal number
    #[error("invalid number in {field}: {raw:?}")]
    InvalidNumber { field: Coordinate, raw: String },

    /// Station name is blank (strict policy only)
    #[error("station name is empty")]
    EmptyName,

    /// Coordinate is outside its valid range (strict policy only)
    #[error("{field} out of range: {value}")]
    OutOfRange { field: Coordinate, value: f64 },
}
