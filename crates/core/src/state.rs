// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::archive::TripArchive;
use crate::fleet::Fleet;
use crate::ledger::BookingLedger;
use vms_domain::{Booking, Trip, Vehicle};

/// The complete system state for one process run.
///
/// Nothing is persisted; a new run starts from [`State::new`].
#[derive(Debug, Clone, Default)]
pub struct State {
    /// All vehicles.
    pub fleet: Fleet,
    /// All active bookings.
    pub ledger: BookingLedger,
    /// All completed trips.
    pub archive: TripArchive,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fleet: Fleet::new(),
            ledger: BookingLedger::new(),
            archive: TripArchive::new(),
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A vehicle joined the fleet.
    VehicleAdded(Vehicle),
    /// A vehicle left the fleet.
    VehicleRemoved(Vehicle),
    /// A booking was created.
    Booked {
        /// The new booking.
        booking: Booking,
        /// The booked vehicle as it was when booked.
        vehicle: Vehicle,
    },
    /// A booking was cancelled. The fields echo the command tokens.
    BookingCancelled {
        /// The plate as typed.
        plate: String,
        /// The beginning date as typed.
        begin: String,
        /// The ending date as typed.
        end: String,
    },
    /// A vehicle was returned and its trip archived.
    TripCompleted(Trip),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VehicleAdded(vehicle) => write!(f, "{vehicle} has been added to the fleet."),
            Self::VehicleRemoved(vehicle) => {
                write!(f, "{vehicle} has been removed from the fleet.")
            }
            Self::Booked { booking, vehicle } => {
                write!(f, "{} booked.", booking.with_vehicle(vehicle))
            }
            Self::BookingCancelled { plate, begin, end } => {
                write!(f, "{plate}:{begin} ~ {end} has been canceled.")
            }
            Self::TripCompleted(trip) => write!(f, "Trip completed: {trip}"),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub outcome: Outcome,
}
