//! Unordered pair enumeration.

use std::iter::FusedIterator;

use crate::domain::{StationDistance, StationLocation};

use super::haversine::haversine_distance;

/// Number of unordered pairs of `n` items: `n * (n - 1) / 2`.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Lazy iterator over the distance of every unordered pair.
///
/// Pairs `(i, j)` with `i < j` are produced in ascending `i`, then ascending
/// `j`, so `[S1, S2, S3]` yields `(S1, S2), (S1, S3), (S2, S3)`.
#[derive(Debug, Clone)]
pub struct PairDistances<'a> {
    locations: &'a [StationLocation],
    i: usize,
    j: usize,
}

impl<'a> PairDistances<'a> {
    fn new(locations: &'a [StationLocation]) -> Self {
        Self {
            locations,
            i: 0,
            j: 1,
        }
    }
}

impl Iterator for PairDistances<'_> {
    type Item = StationDistance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.locations.len() {
            return None;
        }

        let first = &self.locations[self.i];
        let second = &self.locations[self.j];
        let record = StationDistance::new(
            first.name(),
            second.name(),
            haversine_distance(first, second),
        );

        self.j += 1;
        if self.j == self.locations.len() {
            self.i += 1;
            self.j = self.i + 1;
        }

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.locations.len();
        let remaining = if self.j >= n {
            0
        } else {
            // Rest of the current row plus every full row after it
            (n - self.j) + pair_count(n - self.i - 1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairDistances<'_> {}

impl FusedIterator for PairDistances<'_> {}

/// Lazily enumerate the distance of every unordered pair of `locations`.
pub fn pair_distances(locations: &[StationLocation]) -> PairDistances<'_> {
    PairDistances::new(locations)
}

/// Compute the distance of every unordered pair of `locations`.
///
/// Returns `n * (n - 1) / 2` records in the order of [`pair_distances`].
/// Entries sharing a name are still distinct.
pub fn all_pair_distances(locations: &[StationLocation]) -> Vec<StationDistance> {
    pair_distances(locations).collect()
}
