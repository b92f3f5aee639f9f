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

mod apply;
mod archive;
mod clock;
mod command;
mod error;
mod fleet;
mod ledger;
mod report;
mod state;

#[cfg(test)]
mod tests;

use vms_domain::{Plate, Vehicle};

// Re-export public types and functions
pub use apply::apply;
pub use archive::TripArchive;
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use error::CoreError;
pub use fleet::Fleet;
pub use ledger::{BookingLedger, DepartmentSection};
pub use report::Report;
pub use state::{Outcome, State, TransitionResult};

/// Validates that a vehicle with `plate` is in the fleet.
///
/// This is a read-only validation.
///
/// # Arguments
///
/// * `state` - The state to check
/// * `plate` - The plate as typed
///
/// # Returns
///
/// * `Ok(&Vehicle)` if the vehicle exists
/// * `Err(CoreError::VehicleNotFound)` if it does not
///
/// # Errors
///
/// Returns an error if no vehicle in the fleet has this plate.
pub fn validate_vehicle_exists<'a>(
    state: &'a State,
    plate: &str,
) -> Result<&'a Vehicle, CoreError> {
    state
        .fleet
        .find_by_plate(&Plate::new(plate))
        .ok_or_else(|| CoreError::VehicleNotFound {
            plate: plate.to_string(),
        })
}
