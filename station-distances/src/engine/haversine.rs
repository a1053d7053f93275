//! Haversine formula.

use std::f64::consts::PI;

use crate::domain::StationLocation;

/// Mean Earth radius used for all distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert degrees to radians as `degrees * π / 180`.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance between two locations, in kilometers.
///
/// Identical coordinates give exactly zero. For antipodal points the
/// haversine term reaches 1 and `atan2(1, 0)` yields π/2, so the result is
/// half the circumference without any special handling.
///
/// # Examples
///
/// ```
/// use station_distances::domain::StationLocation;
/// use station_distances::engine::haversine_distance;
///
/// let new_york = StationLocation::new("New York", 40.7128, -74.0060);
/// let london = StationLocation::new("London", 51.5074, -0.1278);
/// let km = haversine_distance(&new_york, &london);
/// assert!((km - 5570.2).abs() < 1.0);
/// ```
pub fn haversine_distance(a: &StationLocation, b: &StationLocation) -> f64 {
    let lat_a = degrees_to_radians(a.latitude());
    let lat_b = degrees_to_radians(b.latitude());
    let d_lat = lat_b - lat_a;
    let d_lon = degrees_to_radians(b.longitude()) - degrees_to_radians(a.longitude());

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lon * sin_lon;

    // Rounding can push h a hair past 1 near the antipode
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn location() -> impl Strategy<Value = StationLocation> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| StationLocation::new("P", lat, lon))
    }

    proptest! {
        /// Distance does not depend on argument order
        #[test]
        fn symmetric(a in location(), b in location()) {
            let ab = haversine_distance(&a, &b);
            let ba = haversine_distance(&b, &a);
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0), "{} vs {}", ab, ba);
        }

        /// A location is always exactly zero from itself
        #[test]
        fn zero_to_self(a in location()) {
            prop_assert_eq!(haversine_distance(&a, &a), 0.0);
        }

        /// Results stay within [0, half the circumference]
        #[test]
        fn bounded(a in location(), b in location()) {
            let km = haversine_distance(&a, &b);
            prop_assert!(km >= 0.0);
            prop_assert!(km <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        /// Out-of-range coordinates still give a finite distance
        #[test]
        fn finite_for_any_finite_input(
            lat_a in -1000.0f64..1000.0, lon_a in -1000.0f64..1000.0,
            lat_b in -1000.0f64..1000.0, lon_b in -1000.0f64..1000.0,
        ) {
            let a = StationLocation::new("A", lat_a, lon_a);
            let b = StationLocation::new("B", lat_b, lon_b);
            prop_assert!(haversine_distance(&a, &b).is_finite());
        }
    }
}
