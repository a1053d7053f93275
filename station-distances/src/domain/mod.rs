//! Domain types for station distances.
//!
//! Both record types are immutable once built: a location is produced by
//! the parser, a distance by the engine.

mod distance;
mod location;

pub use distance::StationDistance;
pub use location::StationLocation;
