// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking rule engine.
//!
//! Checks run in the order the arguments appear on the command line and the
//! first failing check wins. The input state is never modified: a successful
//! command returns a new state, a rejected one returns only the error.

use crate::clock::Clock;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, State, TransitionResult};
use crate::validate_vehicle_exists;
use tracing::{debug, info};
use vms_domain::{
    ADVANCE_BOOKING_MONTHS, Booking, Date, Employee, Make, Plate, Trip, Vehicle,
    is_within_max_duration, parse_mileage,
};

/// Applies a command to the current state, producing a new state and outcome.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `clock` - Source of today's date for date-relative checks
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` describing the first rule the command violated
///
/// # Errors
///
/// Returns an error if any validation step for the command fails. The error's
/// `Display` form is the rejection line for the user.
pub fn apply(
    state: &State,
    command: Command,
    clock: &dyn Clock,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();

    let result: Result<TransitionResult, CoreError> = match command {
        Command::AddVehicle {
            plate,
            obtained,
            make,
            mileage,
        } => add_vehicle(
            state,
            clock,
            &plate,
            obtained.as_deref(),
            make.as_deref(),
            mileage.as_deref(),
        ),
        Command::DeleteVehicle { plate } => delete_vehicle(state, &plate),
        Command::BookVehicle {
            begin,
            end,
            plate,
            employee,
        } => book_vehicle(
            state,
            clock,
            &begin,
            end.as_deref(),
            plate.as_deref(),
            employee.as_deref(),
        ),
        Command::CancelBooking { begin, end, plate } => {
            cancel_booking(state, &begin, &end, &plate)
        }
        Command::ReturnVehicle {
            end,
            plate,
            mileage,
        } => return_vehicle(state, &end, &plate, &mileage),
    };

    if let Err(err) = &result {
        debug!(command = name, rejection = %err, "Command rejected");
    }
    result
}

fn add_vehicle(
    state: &State,
    clock: &dyn Clock,
    plate: &str,
    obtained: Option<&str>,
    make: Option<&str>,
    mileage: Option<&str>,
) -> Result<TransitionResult, CoreError> {
    let obtained: &str = next_token(obtained, "A")?;
    let obtained_date: Date =
        Date::parse_valid(obtained).map_err(|_| CoreError::InvalidObtainedDate {
            date: obtained.to_string(),
        })?;

    // Rule: a vehicle must have been obtained before today
    if obtained_date >= clock.today() {
        return Err(CoreError::ObtainedDateNotPast {
            date: obtained.to_string(),
        });
    }

    let make: &str = next_token(make, "A")?;
    let make_value: Make = make.parse().map_err(|_| CoreError::InvalidMake {
        make: make.to_string(),
    })?;

    let mileage: &str = next_token(mileage, "A")?;
    let mileage_value: u32 = parse_mileage(mileage).map_err(|_| CoreError::InvalidMileage {
        mileage: mileage.to_string(),
    })?;

    let vehicle: Vehicle = Vehicle::new(
        Plate::new(plate),
        obtained_date,
        make_value,
        mileage_value,
    );

    // Rule: plates are unique within the fleet
    if state.fleet.contains(&vehicle) {
        return Err(CoreError::DuplicateVehicle {
            plate: plate.to_string(),
        });
    }

    let mut new_state: State = state.clone();
    new_state.fleet.add(vehicle.clone());

    info!(
        plate = %vehicle.plate,
        make = %vehicle.make,
        obtained = %vehicle.obtained,
        mileage = vehicle.mileage,
        "Vehicle added"
    );

    Ok(TransitionResult {
        new_state,
        outcome: Outcome::VehicleAdded(vehicle),
    })
}

fn delete_vehicle(state: &State, plate: &str) -> Result<TransitionResult, CoreError> {
    let vehicle: Vehicle = validate_vehicle_exists(state, plate)?.clone();

    if state.ledger.has_any_for_vehicle(&vehicle.plate) {
        return Err(CoreError::VehicleHasBookings {
            plate: plate.to_string(),
        });
    }

    let mut new_state: State = state.clone();
    new_state.fleet.remove(&vehicle);

    info!(plate = %vehicle.plate, "Vehicle removed");

    Ok(TransitionResult {
        new_state,
        outcome: Outcome::VehicleRemoved(vehicle),
    })
}

fn book_vehicle(
    state: &State,
    clock: &dyn Clock,
    begin: &str,
    end: Option<&str>,
    plate: Option<&str>,
    employee: Option<&str>,
) -> Result<TransitionResult, CoreError> {
    let begin_date: Date = Date::parse_valid(begin).map_err(|_| CoreError::InvalidBeginDate {
        begin: begin.to_string(),
    })?;

    if begin_date < clock.today() {
        return Err(CoreError::BeginDateInPast {
            begin: begin.to_string(),
        });
    }

    let latest_begin: Date = clock.today().add_months(ADVANCE_BOOKING_MONTHS)?;
    if begin_date > latest_begin {
        return Err(CoreError::BeginDateTooFar {
            begin: begin.to_string(),
        });
    }

    let end: &str = next_token(end, "B")?;
    let end_date: Date = Date::parse_valid(end).map_err(|_| CoreError::InvalidEndDate {
        end: end.to_string(),
    })?;

    if end_date < begin_date {
        return Err(CoreError::EndBeforeBegin {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    if !is_within_max_duration(&begin_date, &end_date)? {
        return Err(CoreError::DurationTooLong {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    let plate: &str = next_token(plate, "B")?;
    let vehicle: &Vehicle = validate_vehicle_exists(state, plate)?;

    // Rule: a vehicle cannot be double-booked
    if state.ledger.overlaps(&vehicle.plate, &begin_date, &end_date) {
        return Err(CoreError::VehicleNotAvailable {
            plate: plate.to_string(),
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    let employee: &str = next_token(employee, "B")?;
    let employee_value: Employee = employee.parse().map_err(|_| CoreError::IneligibleEmployee {
        employee: employee.to_string(),
    })?;

    // Rule: an employee cannot hold overlapping bookings on any vehicle
    if state
        .ledger
        .employee_conflict(employee_value, &begin_date, &end_date)
    {
        return Err(CoreError::EmployeeConflict {
            employee: employee_value,
            begin: begin.to_string(),
        });
    }

    let booking: Booking = Booking::new(
        begin_date,
        end_date,
        employee_value,
        vehicle.plate.clone(),
    );

    let mut new_state: State = state.clone();
    new_state.ledger.add(booking.clone());

    info!(
        plate = %booking.plate,
        begin = %booking.begin,
        end = %booking.end,
        employee = %booking.employee,
        "Booking created"
    );

    Ok(TransitionResult {
        new_state,
        outcome: Outcome::Booked {
            booking,
            vehicle: vehicle.clone(),
        },
    })
}

// Malformed dates are not reported separately: they cannot match a stored
// booking and surface as "cannot find the booking".
fn cancel_booking(
    state: &State,
    begin: &str,
    end: &str,
    plate: &str,
) -> Result<TransitionResult, CoreError> {
    let plate_key: Plate = Plate::new(plate);

    let booking: Booking = lookup_date(begin)
        .zip(lookup_date(end))
        .and_then(|(begin_date, end_date)| {
            state
                .ledger
                .find_by_vehicle_and_interval(&plate_key, &begin_date, &end_date)
        })
        .cloned()
        .ok_or_else(|| CoreError::BookingNotFound {
            plate: plate.to_string(),
            begin: begin.to_string(),
            end: end.to_string(),
        })?;

    let mut new_state: State = state.clone();
    new_state.ledger.remove(&booking);

    info!(
        plate = %booking.plate,
        begin = %booking.begin,
        end = %booking.end,
        "Booking cancelled"
    );

    Ok(TransitionResult {
        new_state,
        outcome: Outcome::BookingCancelled {
            plate: plate.to_string(),
            begin: begin.to_string(),
            end: end.to_string(),
        },
    })
}

fn return_vehicle(
    state: &State,
    end: &str,
    plate: &str,
    mileage: &str,
) -> Result<TransitionResult, CoreError> {
    let plate_key: Plate = Plate::new(plate);

    let booking: Booking = lookup_date(end)
        .and_then(|end_date| state.ledger.find_by_vehicle_and_end(&plate_key, &end_date))
        .cloned()
        .ok_or_else(|| CoreError::ReturnBookingNotFound {
            plate: plate.to_string(),
            end: end.to_string(),
        })?;

    // Rule: the booking ending first across the whole ledger is returned first
    if state
        .ledger
        .earliest_end_date()
        .is_some_and(|earliest| earliest != booking.end)
    {
        return Err(CoreError::ReturnOutOfOrder {
            plate: plate.to_string(),
            end: end.to_string(),
        });
    }

    let new_mileage: u32 = parse_mileage(mileage).map_err(|_| CoreError::InvalidMileage {
        mileage: mileage.to_string(),
    })?;

    let current_mileage: u32 = validate_vehicle_exists(state, plate)?.mileage;
    if new_mileage <= current_mileage {
        return Err(CoreError::MileageNotIncreased {
            current: current_mileage,
            entered: new_mileage,
        });
    }

    let trip: Trip = Trip::new(booking.clone(), current_mileage, new_mileage);

    let mut new_state: State = state.clone();
    new_state.archive.add(trip.clone());
    if let Some(vehicle) = new_state.fleet.find_by_plate_mut(&booking.plate) {
        vehicle.mileage = new_mileage;
    }
    new_state.ledger.remove(&booking);

    info!(
        plate = %booking.plate,
        end = %booking.end,
        original_mileage = current_mileage,
        current_mileage = new_mileage,
        "Trip completed"
    );

    Ok(TransitionResult {
        new_state,
        outcome: Outcome::TripCompleted(trip),
    })
}

/// Takes the next argument of `command`, or rejects the line if it ran out.
fn next_token<'t>(token: Option<&'t str>, command: &'static str) -> Result<&'t str, CoreError> {
    token.ok_or(CoreError::MissingArguments { command })
}

fn lookup_date(text: &str) -> Option<Date> {
    text.parse().ok()
}
