//! Station location type.

use std::fmt;

use serde::Serialize;

/// A named point on the Earth's surface, in degrees.
///
/// The name is an opaque label: two locations may share a name and are
/// still distinct entries. Coordinates are stored exactly as parsed; range
/// checking is the parser's concern.
///
/// # Examples
///
/// ```
/// use station_distances::domain::StationLocation;
///
/// let alpha = StationLocation::new("Alpha", 40.7128, -74.0060);
/// assert_eq!(alpha.name(), "Alpha");
/// assert_eq!(alpha.latitude(), 40.7128);
/// assert_eq!(alpha.longitude(), -74.0060);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationLocation {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl StationLocation {
    /// Create a location from a name and coordinates in degrees.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// The station's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for StationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let loc = StationLocation::new("London", 51.5074, -0.1278);
        assert_eq!(loc.name(), "London");
        assert_eq!(loc.latitude(), 51.5074);
        assert_eq!(loc.longitude(), -0.1278);
    }

    #[test]
    fn display() {
        let loc = StationLocation::new("Origin", 0.0, 1.5);
        assert_eq!(loc.to_string(), "Origin (0, 1.5)");
    }

    #[test]
    fn equality_includes_coordinates() {
        let a = StationLocation::new("Same", 1.0, 2.0);
        let b = StationLocation::new("Same", 1.0, 2.0);
        let c = StationLocation::new("Same", 1.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
