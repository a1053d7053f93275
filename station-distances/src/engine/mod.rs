//! Distance engine.
//!
//! Haversine great-circle distance between two locations, and the
//! enumeration of every unordered pair of a location list.

mod haversine;
mod pairs;

pub use haversine::{EARTH_RADIUS_KM, degrees_to_radians, haversine_distance};
pub use pairs::{PairDistances, all_pair_distances, pair_count, pair_distances};
