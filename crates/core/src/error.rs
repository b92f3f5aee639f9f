// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rejections produced by the rule engine.
//!
//! The `Display` form of each variant is the exact line shown to the user.
//! Token fields hold the text as typed, not a normalized value.

use thiserror::Error;
use vms_domain::{DomainError, Employee};

/// Errors that can occur while applying a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The obtained date is malformed or not a calendar date.
    #[error("{date} - invalid calendar date.")]
    InvalidObtainedDate { date: String },

    /// The obtained date is not in the past.
    #[error("{date} - is today or a future date.")]
    ObtainedDateNotPast { date: String },

    /// The make is not a known make.
    #[error("{make} - invalid make.")]
    InvalidMake { make: String },

    /// The mileage is not a positive integer.
    #[error("{mileage} - invalid mileage.")]
    InvalidMileage { mileage: String },

    /// The plate is already used by a vehicle in the fleet.
    #[error("{plate} is already in the fleet.")]
    DuplicateVehicle { plate: String },

    /// No vehicle has this plate.
    #[error("{plate} is not in the fleet.")]
    VehicleNotFound { plate: String },

    /// The vehicle still has active bookings.
    #[error("{plate} - has existing bookings; cannot be removed.")]
    VehicleHasBookings { plate: String },

    /// The beginning date is malformed or not a calendar date.
    #[error("{begin} - beginning date is not a valid calendar date.")]
    InvalidBeginDate { begin: String },

    /// The beginning date is before today.
    #[error("{begin} - beginning date is not today or a future date.")]
    BeginDateInPast { begin: String },

    /// The beginning date is past the advance-booking window.
    #[error("{begin} - beginning date beyond 3 months.")]
    BeginDateTooFar { begin: String },

    /// The ending date is malformed or not a calendar date.
    #[error("{end} - ending date is not a valid calendar date.")]
    InvalidEndDate { end: String },

    /// The ending date is before the beginning date.
    #[error("{end} - ending date must be equal or after the beginning date {begin}")]
    EndBeforeBegin { begin: String, end: String },

    /// The booking spans more than seven days.
    #[error("{begin} ~ {end} - duration more than a week.")]
    DurationTooLong { begin: String, end: String },

    /// The vehicle is already booked for part of the interval.
    #[error("{plate} - booking with {begin} ~ {end} not available.")]
    VehicleNotAvailable {
        plate: String,
        begin: String,
        end: String,
    },

    /// The employee identifier is not in the catalog.
    #[error("{employee} - not an eligible employee to book.")]
    IneligibleEmployee { employee: String },

    /// The employee already holds an overlapping booking.
    #[error("{employee} - has an existing booking conflicting with the beginning date {begin}")]
    EmployeeConflict { employee: Employee, begin: String },

    /// No booking matches the plate, begin and end given to cancel.
    #[error("{plate}:{begin} ~ {end} - cannot find the booking.")]
    BookingNotFound {
        plate: String,
        begin: String,
        end: String,
    },

    /// No booking matches the plate and end given to return.
    #[error("{plate} booked with ending date {end} - cannot find the booking.")]
    ReturnBookingNotFound { plate: String, end: String },

    /// Another active booking ends earlier and must be returned first.
    #[error("{plate} booked with ending date {end} - returning not in order of ending date.")]
    ReturnOutOfOrder { plate: String, end: String },

    /// The returned mileage does not exceed the vehicle's current mileage.
    #[error("Invalid mileage - current mileage: {current} entered mileage: {entered}")]
    MileageNotIncreased { current: u32, entered: u32 },

    /// A check needed an argument the command line did not supply.
    #[error("{command} - missing arguments!")]
    MissingArguments { command: &'static str },

    /// A domain rule failed outside the user-facing checks.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}
