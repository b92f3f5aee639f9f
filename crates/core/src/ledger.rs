// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The active bookings.
//!
//! ## Invariants
//!
//! - No two bookings for the same vehicle overlap.
//! - No two bookings for the same employee overlap, whatever the vehicle.
//!
//! The ledger does not enforce these on [`BookingLedger::add`]; the rule
//! engine checks [`BookingLedger::overlaps`] and
//! [`BookingLedger::employee_conflict`] before adding.

use vms_domain::{Booking, Date, Department, Employee, Plate};

/// Bookings grouped under one department header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSection<'a> {
    /// The department shared by every booking in this section.
    pub department: Department,
    /// The bookings, ordered by employee identifier.
    pub bookings: Vec<&'a Booking>,
}

/// The set of active bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Adds a booking.
    pub fn add(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Removes the equal booking (same plate, begin and end). Does nothing if absent.
    pub fn remove(&mut self, booking: &Booking) {
        if let Some(index) = self.bookings.iter().position(|b| b == booking) {
            self.bookings.remove(index);
        }
    }

    /// Checks whether an equal booking is active.
    #[must_use]
    pub fn contains(&self, booking: &Booking) -> bool {
        self.bookings.contains(booking)
    }

    /// Returns the number of active bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns whether there are no active bookings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    /// Finds the booking with exactly this plate, begin and end.
    #[must_use]
    pub fn find_by_vehicle_and_interval(
        &self,
        plate: &Plate,
        begin: &Date,
        end: &Date,
    ) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| &b.plate == plate && &b.begin == begin && &b.end == end)
    }

    /// Finds a booking by plate and end date only.
    #[must_use]
    pub fn find_by_vehicle_and_end(&self, plate: &Plate, end: &Date) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| &b.plate == plate && &b.end == end)
    }

    /// Checks whether any booking for `plate` shares a day with `[begin, end]`.
    #[must_use]
    pub fn overlaps(&self, plate: &Plate, begin: &Date, end: &Date) -> bool {
        self.bookings
            .iter()
            .any(|b| &b.plate == plate && b.overlaps(begin, end))
    }

    /// Checks whether `employee` already holds a booking sharing a day with `[begin, end]`.
    #[must_use]
    pub fn employee_conflict(&self, employee: Employee, begin: &Date, end: &Date) -> bool {
        self.bookings
            .iter()
            .any(|b| b.employee == employee && b.overlaps(begin, end))
    }

    /// Checks whether the vehicle has any active booking.
    #[must_use]
    pub fn has_any_for_vehicle(&self, plate: &Plate) -> bool {
        self.bookings.iter().any(|b| &b.plate == plate)
    }

    /// Returns the earliest end date across all active bookings.
    #[must_use]
    pub fn earliest_end_date(&self) -> Option<Date> {
        self.bookings.iter().map(|b| b.end).min()
    }

    /// Returns the bookings ordered by plate, then begin date. Stable.
    #[must_use]
    pub fn ordered_by_vehicle_then_begin(&self) -> Vec<&Booking> {
        let mut ordered: Vec<&Booking> = self.bookings.iter().collect();
        ordered.sort_by(|a, b| a.plate.cmp(&b.plate).then_with(|| a.begin.cmp(&b.begin)));
        ordered
    }

    /// Returns the bookings grouped by department.
    ///
    /// Sections follow [`Department::ALL`]; departments without bookings are
    /// left out. Within a section bookings are ordered by employee
    /// identifier, ties keeping insertion order.
    #[must_use]
    pub fn ordered_by_department_then_employee(&self) -> Vec<DepartmentSection<'_>> {
        let mut ordered: Vec<&Booking> = self.bookings.iter().collect();
        ordered.sort_by(|a, b| {
            a.employee
                .department()
                .display_name()
                .cmp(b.employee.department().display_name())
                .then_with(|| a.employee.as_str().cmp(b.employee.as_str()))
        });

        Department::ALL
            .into_iter()
            .filter_map(|department| {
                let bookings: Vec<&Booking> = ordered
                    .iter()
                    .copied()
                    .filter(|b| b.employee.department() == department)
                    .collect();
                (!bookings.is_empty()).then_some(DepartmentSection {
                    department,
                    bookings,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BookingLedger {
    type Item = &'a Booking;
    type IntoIter = std::slice::Iter<'a, Booking>;

    fn into_iter(self) -> Self::IntoIter {
        self.bookings.iter()
    }
}
