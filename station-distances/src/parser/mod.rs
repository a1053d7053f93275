//! Location parser.
//!
//! Turns one raw row of fields into a [`StationLocation`]. Pure and
//! stateless: the same row always yields the same result.
//!
//! [`StationLocation`]: crate::domain::StationLocation

mod error;
mod row;

pub use error::{Coordinate, ParseError};
pub use row::{MIN_FIELDS, parse_location};
