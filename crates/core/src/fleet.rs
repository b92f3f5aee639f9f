// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vms_domain::{Plate, Vehicle};

/// The set of vehicles, keyed by license plate.
///
/// Insertion order is kept; ordered views are produced on demand.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates an empty fleet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    /// Adds a vehicle.
    ///
    /// Uniqueness is the caller's responsibility; check [`Fleet::contains`] first.
    pub fn add(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Removes the vehicle with the same plate. Does nothing if absent.
    pub fn remove(&mut self, vehicle: &Vehicle) {
        self.vehicles.retain(|v| v != vehicle);
    }

    /// Checks whether a vehicle with the same plate is in the fleet.
    #[must_use]
    pub fn contains(&self, vehicle: &Vehicle) -> bool {
        self.vehicles.contains(vehicle)
    }

    /// Looks up a vehicle by plate.
    #[must_use]
    pub fn find_by_plate(&self, plate: &Plate) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.plate == plate)
    }

    pub(crate) fn find_by_plate_mut(&mut self, plate: &Plate) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| &v.plate == plate)
    }

    /// Returns the number of vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns whether the fleet has no vehicles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Returns the vehicles ordered by make name, then obtained date.
    ///
    /// The sort is stable: ties keep insertion order.
    #[must_use]
    pub fn ordered_by_make_then_date(&self) -> Vec<&Vehicle> {
        let mut ordered: Vec<&Vehicle> = self.vehicles.iter().collect();
        ordered.sort_by(|a, b| {
            a.make
                .as_str()
                .cmp(b.make.as_str())
                .then_with(|| a.obtained.cmp(&b.obtained))
        });
        ordered
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}
