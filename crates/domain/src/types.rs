// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{Employee, Make};
use crate::date::Date;
use crate::validation::intervals_overlap;
use serde::{Deserialize, Serialize};

/// A license plate, the sole identity of a vehicle.
///
/// Plates are compared exactly as entered (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Plate {
    value: String,
}

impl Plate {
    /// Creates a new `Plate`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the plate text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A vehicle in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// The license plate.
    pub plate: Plate,
    /// The date the vehicle was obtained.
    pub obtained: Date,
    /// The vehicle make.
    pub make: Make,
    /// The current odometer reading.
    pub mileage: u32,
}

// Two vehicles are the same vehicle if they share a plate
impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl std::hash::Hash for Vehicle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

impl Vehicle {
    /// Creates a new `Vehicle`.
    ///
    /// # Arguments
    ///
    /// * `plate` - The license plate
    /// * `obtained` - The date the vehicle joined the fleet
    /// * `make` - The vehicle make
    /// * `mileage` - The current odometer reading
    #[must_use]
    pub const fn new(plate: Plate, obtained: Date, make: Make, mileage: u32) -> Self {
        Self {
            plate,
            obtained,
            make,
            mileage,
        }
    }
}

/// Text form: `plate:MAKE:m/d/yyyy [mileage:####]`.
impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{} [mileage:{}]",
            self.plate, self.make, self.obtained, self.mileage
        )
    }
}

/// A reservation of one vehicle by one employee over an inclusive date range.
///
/// The vehicle is referenced by plate. Its make and mileage are looked up at
/// display time, so a booking always shows the vehicle's current mileage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// First day of the booking.
    pub begin: Date,
    /// Last day of the booking.
    pub end: Date,
    /// The employee holding the booking.
    pub employee: Employee,
    /// The booked vehicle.
    pub plate: Plate,
}

// Employee is not part of a booking's identity
impl PartialEq for Booking {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate && self.begin == other.begin && self.end == other.end
    }
}

impl Eq for Booking {}

impl Booking {
    /// Creates a new `Booking`.
    #[must_use]
    pub const fn new(begin: Date, end: Date, employee: Employee, plate: Plate) -> Self {
        Self {
            begin,
            end,
            employee,
            plate,
        }
    }

    /// Returns whether `[begin, end]` shares at least one day with this booking.
    #[must_use]
    pub fn overlaps(&self, begin: &Date, end: &Date) -> bool {
        intervals_overlap(begin, end, &self.begin, &self.end)
    }

    /// Pairs this booking with its vehicle for display.
    ///
    /// The caller is responsible for passing the vehicle whose plate matches.
    #[must_use]
    pub const fn with_vehicle<'a>(&'a self, vehicle: &'a Vehicle) -> BookedVehicle<'a> {
        BookedVehicle {
            booking: self,
            vehicle,
        }
    }
}

/// A booking together with the vehicle it reserves.
///
/// Text form: `<vehicle> [beginning m/d/yyyy ending m/d/yyyy:EMPLOYEE]`.
#[derive(Debug, Clone, Copy)]
pub struct BookedVehicle<'a> {
    booking: &'a Booking,
    vehicle: &'a Vehicle,
}

impl std::fmt::Display for BookedVehicle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [beginning {} ending {}:{}]",
            self.vehicle, self.booking.begin, self.booking.end, self.booking.employee
        )
    }
}

/// A completed booking with the odometer readings before and after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// The booking this trip fulfilled.
    pub booking: Booking,
    /// Odometer reading when the trip began.
    pub begin_mileage: u32,
    /// Odometer reading when the vehicle was returned.
    pub end_mileage: u32,
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.booking == other.booking
    }
}

impl Eq for Trip {}

impl Trip {
    /// Creates a new `Trip`.
    ///
    /// `end_mileage` is expected to be strictly greater than `begin_mileage`;
    /// the rule engine rejects returns that do not satisfy this.
    #[must_use]
    pub const fn new(booking: Booking, begin_mileage: u32, end_mileage: u32) -> Self {
        Self {
            booking,
            begin_mileage,
            end_mileage,
        }
    }

    /// Returns the distance driven during the trip.
    #[must_use]
    pub const fn mileage_used(&self) -> u32 {
        self.end_mileage.saturating_sub(self.begin_mileage)
    }
}

impl std::fmt::Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ~ {} original mileage: {} current mileage: {} mileage used: {}",
            self.booking.plate,
            self.booking.begin,
            self.booking.end,
            self.begin_mileage,
            self.end_mileage,
            self.mileage_used()
        )
    }
}
