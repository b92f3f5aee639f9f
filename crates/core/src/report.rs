// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only listings of the fleet, bookings and trips.
//!
//! Each listing is either a single "there is nothing" line or a framed list:
//! a `*...` description line, the entries, then `*end of list.`.

use crate::state::State;
use vms_domain::Booking;

const END_OF_LIST: &str = "*end of list.";

/// A listing the user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Vehicles ordered by make, then obtained date.
    Fleet,
    /// Bookings ordered by plate, then beginning date.
    BookingsByVehicle,
    /// Bookings grouped by department, ordered by employee.
    BookingsByDepartment,
    /// Completed trips ordered by ending date.
    Trips,
}

impl Report {
    /// Renders the listing against `state`, one output line per element.
    #[must_use]
    pub fn render(self, state: &State) -> Vec<String> {
        match self {
            Self::Fleet => render_fleet(state),
            Self::BookingsByVehicle => render_bookings_by_vehicle(state),
            Self::BookingsByDepartment => render_bookings_by_department(state),
            Self::Trips => render_trips(state),
        }
    }
}

fn render_fleet(state: &State) -> Vec<String> {
    if state.fleet.is_empty() {
        return vec![String::from("There is no vehicle in the fleet.")];
    }

    let mut lines: Vec<String> = vec![String::from(
        "*List of vehicles in the fleet, ordered by make and date obtained.",
    )];
    lines.extend(
        state
            .fleet
            .ordered_by_make_then_date()
            .into_iter()
            .map(ToString::to_string),
    );
    lines.push(String::from(END_OF_LIST));
    lines
}

fn render_bookings_by_vehicle(state: &State) -> Vec<String> {
    if state.ledger.is_empty() {
        return vec![String::from("There is no booking record.")];
    }

    let mut lines: Vec<String> = vec![String::from(
        "*List of reservations ordered by license plate number and beginning date.",
    )];
    lines.extend(
        state
            .ledger
            .ordered_by_vehicle_then_begin()
            .into_iter()
            .map(|booking| booking_line(state, booking)),
    );
    lines.push(String::from(END_OF_LIST));
    lines
}

fn render_bookings_by_department(state: &State) -> Vec<String> {
    if state.ledger.is_empty() {
        return vec![String::from("There is no booking record.")];
    }

    let mut lines: Vec<String> = vec![String::from(
        "*List of reservations ordered by department and employee.",
    )];
    for section in state.ledger.ordered_by_department_then_employee() {
        lines.push(format!("--{}--", section.department.display_name()));
        lines.extend(
            section
                .bookings
                .into_iter()
                .map(|booking| booking_line(state, booking)),
        );
    }
    lines.push(String::from(END_OF_LIST));
    lines
}

fn render_trips(state: &State) -> Vec<String> {
    if state.archive.is_empty() {
        return vec![String::from("There is no archived trips.")];
    }

    let mut lines: Vec<String> = vec![String::from(
        "*List of completed trips ordered by ending date.",
    )];
    lines.extend(
        state
            .archive
            .ordered_by_end_date()
            .into_iter()
            .map(ToString::to_string),
    );
    lines.push(String::from(END_OF_LIST));
    lines
}

// A booked vehicle cannot leave the fleet, so the lookup only fails if the
// state was assembled by hand.
fn booking_line(state: &State, booking: &Booking) -> String {
    state.fleet.find_by_plate(&booking.plate).map_or_else(
        || {
            format!(
                "{} [beginning {} ending {}:{}]",
                booking.plate, booking.begin, booking.end, booking.employee
            )
        },
        |vehicle| booking.with_vehicle(vehicle).to_string(),
    )
}
