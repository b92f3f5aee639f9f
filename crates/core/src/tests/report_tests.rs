// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    add_vehicle_command, apply_ok, book_command, create_test_state, return_command,
};
use crate::{Report, State};

#[test]
fn test_empty_listings() {
    let state: State = State::new();

    assert_eq!(
        Report::Fleet.render(&state),
        vec!["There is no vehicle in the fleet."]
    );
    assert_eq!(
        Report::BookingsByVehicle.render(&state),
        vec!["There is no booking record."]
    );
    assert_eq!(
        Report::BookingsByDepartment.render(&state),
        vec!["There is no booking record."]
    );
    assert_eq!(
        Report::Trips.render(&state),
        vec!["There is no archived trips."]
    );
}

#[test]
fn test_fleet_listing() {
    let state: State = apply_ok(
        &create_test_state(),
        add_vehicle_command("CC333", "7/4/2019", "ford", "250"),
    );

    assert_eq!(
        Report::Fleet.render(&state),
        vec![
            "*List of vehicles in the fleet, ordered by make and date obtained.",
            "BB222:CHEVY:3/15/2022 [mileage:5000]",
            "CC333:FORD:7/4/2019 [mileage:250]",
            "AA111:FORD:1/1/2020 [mileage:1000]",
            "*end of list.",
        ]
    );
}

#[test]
fn test_bookings_by_vehicle_listing() {
    let state: State = apply_ok(
        &create_test_state(),
        book_command("10/25/2026", "10/26/2026", "BB222", "KAUR"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/22/2026", "10/23/2026", "AA111", "LIM"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/19/2026", "10/20/2026", "AA111", "PATEL"),
    );

    assert_eq!(
        Report::BookingsByVehicle.render(&state),
        vec![
            "*List of reservations ordered by license plate number and beginning date.",
            "AA111:FORD:1/1/2020 [mileage:1000] [beginning 10/19/2026 ending 10/20/2026:PATEL]",
            "AA111:FORD:1/1/2020 [mileage:1000] [beginning 10/22/2026 ending 10/23/2026:LIM]",
            "BB222:CHEVY:3/15/2022 [mileage:5000] [beginning 10/25/2026 ending 10/26/2026:KAUR]",
            "*end of list.",
        ]
    );
}

#[test]
fn test_bookings_by_department_listing() {
    let state: State = apply_ok(
        &create_test_state(),
        book_command("10/19/2026", "10/20/2026", "AA111", "ZIMNES"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/19/2026", "10/20/2026", "BB222", "TAYLOR"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/22/2026", "10/23/2026", "AA111", "PATEL"),
    );

    assert_eq!(
        Report::BookingsByDepartment.render(&state),
        vec![
            "*List of reservations ordered by department and employee.",
            "--Computer Science--",
            "AA111:FORD:1/1/2020 [mileage:1000] [beginning 10/22/2026 ending 10/23/2026:PATEL]",
            "AA111:FORD:1/1/2020 [mileage:1000] [beginning 10/19/2026 ending 10/20/2026:ZIMNES]",
            "--Mathematics--",
            "BB222:CHEVY:3/15/2022 [mileage:5000] [beginning 10/19/2026 ending 10/20/2026:TAYLOR]",
            "*end of list.",
        ]
    );
}

#[test]
fn test_booking_listing_shows_mileage_after_earlier_return() {
    let state: State = apply_ok(
        &create_test_state(),
        book_command("10/19/2026", "10/20/2026", "AA111", "PATEL"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/22/2026", "10/23/2026", "AA111", "PATEL"),
    );
    let state: State = apply_ok(&state, return_command("10/20/2026", "AA111", "1300"));

    assert_eq!(
        Report::BookingsByVehicle.render(&state),
        vec![
            "*List of reservations ordered by license plate number and beginning date.",
            "AA111:FORD:1/1/2020 [mileage:1300] [beginning 10/22/2026 ending 10/23/2026:PATEL]",
            "*end of list.",
        ]
    );
}

#[test]
fn test_trips_listing_is_ordered_by_end_date() {
    let state: State = apply_ok(
        &create_test_state(),
        book_command("10/19/2026", "10/20/2026", "BB222", "LIM"),
    );
    let state: State = apply_ok(
        &state,
        book_command("10/19/2026", "10/22/2026", "AA111", "PATEL"),
    );
    let state: State = apply_ok(&state, return_command("10/20/2026", "BB222", "5100"));
    let state: State = apply_ok(&state, return_command("10/22/2026", "AA111", "1400"));

    assert_eq!(
        Report::Trips.render(&state),
        vec![
            "*List of completed trips ordered by ending date.",
            "BB222 10/19/2026 ~ 10/20/2026 original mileage: 5000 current mileage: 5100 mileage used: 100",
            "AA111 10/19/2026 ~ 10/22/2026 original mileage: 1000 current mileage: 1400 mileage used: 400",
            "*end of list.",
        ]
    );
}
