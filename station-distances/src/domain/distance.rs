//! Pairwise distance record.

use serde::Serialize;

/// The great-circle distance between two stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDistance {
    /// Name of the station that comes first in the input order.
    pub first_station: String,

    /// Name of the station that comes later in the input order.
    pub second_station: String,

    /// Distance in kilometers. Never negative.
    pub distance_km: f64,
}

impl StationDistance {
    /// Create a new distance record.
    pub fn new(
        first_station: impl Into<String>,
        second_station: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self {
            first_station: first_station.into(),
            second_station: second_station.into(),
            distance_km,
        }
    }
}
