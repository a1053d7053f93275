//! Pairwise great-circle distances between named stations.
//!
//! Reads station locations from a delimited source, then computes the
//! haversine distance for every unordered pair of stations.

pub mod config;
pub mod domain;
pub mod engine;
pub mod ingest;
pub mod parser;
pub mod report;
pub mod run;
