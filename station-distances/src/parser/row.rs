//! Row to location conversion.

use crate::config::CoordinatePolicy;
use crate::domain::StationLocation;

use super::error::{Coordinate, ParseError};

/// Number of leading fields a data row must carry: name, latitude, longitude.
pub const MIN_FIELDS: usize = 3;

/// Parse a row of `[name, latitude, longitude, ...]` into a location.
///
/// Fields are trimmed before use and anything past the third field is
/// ignored. Coordinates must be finite decimal numbers. Under
/// [`CoordinatePolicy::Permissive`] nothing else is checked, so an empty
/// name or a latitude of 999 is accepted; [`CoordinatePolicy::Strict`] also
/// requires a name and enforces coordinate ranges.
///
/// # Examples
///
/// ```
/// use station_distances::config::CoordinatePolicy;
/// use station_distances::parser::{ParseError, parse_location};
///
/// let row = ["Alpha", " 40.7128", "-74.0060 "];
/// let loc = parse_location(&row, CoordinatePolicy::Permissive).unwrap();
/// assert_eq!(loc.name(), "Alpha");
/// assert_eq!(loc.latitude(), 40.7128);
///
/// let err = parse_location(&["OnlyOneField"], CoordinatePolicy::Permissive).unwrap_err();
/// assert_eq!(err, ParseError::MalformedRow { found: 1 });
/// ```
pub fn parse_location<S: AsRef<str>>(
    row: &[S],
    policy: CoordinatePolicy,
) -> Result<StationLocation, ParseError> {
    if row.len() < MIN_FIELDS {
        return Err(ParseError::MalformedRow { found: row.len() });
    }

    let name = row[0].as_ref().trim();
    let latitude = parse_coordinate(row[1].as_ref(), Coordinate::Latitude)?;
    let longitude = parse_coordinate(row[2].as_ref(), Coordinate::Longitude)?;

    if policy == CoordinatePolicy::Strict {
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }
        check_range(latitude, Coordinate::Latitude)?;
        check_range(longitude, Coordinate::Longitude)?;
    }

    Ok(StationLocation::new(name, latitude, longitude))
}

fn parse_coordinate(raw: &str, field: Coordinate) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber {
            field,
            raw: trimmed.to_string(),
        }),
    }
}

fn check_range(value: f64, field: Coordinate) -> Result<(), ParseError> {
    let limit = match field {
        Coordinate::Latitude => 90.0,
        Coordinate::Longitude => 180.0,
    };

    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::OutOfRange { field, value })
    }
}
