// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod date;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use catalog::{Department, Employee, Make};
pub use date::{Date, is_leap_year};
pub use error::DomainError;
pub use types::{BookedVehicle, Booking, Plate, Trip, Vehicle};
pub use validation::{
    ADVANCE_BOOKING_MONTHS, MAX_BOOKING_DAYS, intervals_overlap, is_within_max_duration,
    parse_mileage,
};
