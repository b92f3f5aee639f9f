// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, FixedClock, State, apply};
use vms_domain::Date;

/// The date every test treats as today.
pub const TODAY: Date = Date::new(10, 18, 2026);

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(TODAY)
}

pub fn add_vehicle_command(plate: &str, obtained: &str, make: &str, mileage: &str) -> Command {
    Command::AddVehicle {
        plate: plate.to_string(),
        obtained: Some(obtained.to_string()),
        make: Some(make.to_string()),
        mileage: Some(mileage.to_string()),
    }
}

pub fn book_command(begin: &str, end: &str, plate: &str, employee: &str) -> Command {
    Command::BookVehicle {
        begin: begin.to_string(),
        end: Some(end.to_string()),
        plate: Some(plate.to_string()),
        employee: Some(employee.to_string()),
    }
}

pub fn cancel_command(begin: &str, end: &str, plate: &str) -> Command {
    Command::CancelBooking {
        begin: begin.to_string(),
        end: end.to_string(),
        plate: plate.to_string(),
    }
}

pub fn return_command(end: &str, plate: &str, mileage: &str) -> Command {
    Command::ReturnVehicle {
        end: end.to_string(),
        plate: plate.to_string(),
        mileage: mileage.to_string(),
    }
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &State, command: Command) -> State {
    apply(state, command, &create_test_clock())
        .unwrap()
        .new_state
}

/// Two vehicles, no bookings:
/// `AA111:FORD:1/1/2020 [mileage:1000]` and `BB222:CHEVY:3/15/2022 [mileage:5000]`.
pub fn create_test_state() -> State {
    let state: State = apply_ok(
        &State::new(),
        add_vehicle_command("AA111", "1/1/2020", "FORD", "1000"),
    );
    apply_ok(
        &state,
        add_vehicle_command("BB222", "3/15/2022", "CHEVY", "5000"),
    )
}
