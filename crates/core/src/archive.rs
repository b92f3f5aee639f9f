// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vms_domain::Trip;

/// Append-only history of completed trips.
#[derive(Debug, Clone, Default)]
pub struct TripArchive {
    trips: Vec<Trip>,
}

impl TripArchive {
    /// Creates an empty archive.
    #[must_use]
    pub const fn new() -> Self {
        Self { trips: Vec::new() }
    }

    /// Records a completed trip.
    pub fn add(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Returns the number of archived trips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns whether no trip has been completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Iterates in the order trips were completed.
    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter()
    }

    /// Returns the trips ordered by their booking's end date. Stable.
    #[must_use]
    pub fn ordered_by_end_date(&self) -> Vec<&Trip> {
        let mut ordered: Vec<&Trip> = self.trips.iter().collect();
        ordered.sort_by(|a, b| a.booking.end.cmp(&b.booking.end));
        ordered
    }
}

impl<'a> IntoIterator for &'a TripArchive {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
