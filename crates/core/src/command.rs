// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents user intent as data only.
///
/// Arguments are kept as the raw tokens the user typed. Parsing is part of
/// validation: each token is parsed when its check is reached, and rejections
/// echo the token back unchanged.
///
/// Add and book check their arguments one at a time, so everything after
/// the first argument is optional here. A missing token is only reported
/// once a check needs it; an earlier bad token is reported first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a vehicle to the fleet.
    AddVehicle {
        /// The license plate.
        plate: String,
        /// The date obtained, `m/d/yyyy`.
        obtained: Option<String>,
        /// The make, case-insensitive.
        make: Option<String>,
        /// The current odometer reading.
        mileage: Option<String>,
    },
    /// Remove a vehicle that has no bookings.
    DeleteVehicle {
        /// The license plate.
        plate: String,
    },
    /// Reserve a vehicle for an employee.
    BookVehicle {
        /// First day, `m/d/yyyy`.
        begin: String,
        /// Last day, `m/d/yyyy`.
        end: Option<String>,
        /// The license plate.
        plate: Option<String>,
        /// The employee identifier, case-insensitive.
        employee: Option<String>,
    },
    /// Cancel an active booking.
    CancelBooking {
        /// First day of the booking.
        begin: String,
        /// Last day of the booking.
        end: String,
        /// The license plate.
        plate: String,
    },
    /// Return a vehicle, completing its trip.
    ReturnVehicle {
        /// Last day of the booking being returned.
        end: String,
        /// The license plate.
        plate: String,
        /// The odometer reading on return.
        mileage: String,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddVehicle { .. } => "AddVehicle",
            Self::DeleteVehicle { .. } => "DeleteVehicle",
            Self::BookVehicle { .. } => "BookVehicle",
            Self::CancelBooking { .. } => "CancelBooking",
            Self::ReturnVehicle { .. } => "ReturnVehicle",
        }
    }
}
