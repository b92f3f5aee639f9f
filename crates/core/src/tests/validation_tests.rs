// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for read-only validation functions.

use crate::{CoreError, State, validate_vehicle_exists};

use super::helpers::create_test_state;

#[test]
fn test_validate_vehicle_exists_succeeds() {
    let state: State = create_test_state();

    let vehicle = validate_vehicle_exists(&state, "AA111").unwrap();

    assert_eq!(vehicle.mileage, 1000);
}

#[test]
fn test_validate_vehicle_exists_is_case_sensitive() {
    let state: State = create_test_state();

    let result = validate_vehicle_exists(&state, "aa111");

    assert!(matches!(
        result.unwrap_err(),
        CoreError::VehicleNotFound { .. }
    ));
}

#[test]
fn test_validate_vehicle_exists_fails_for_empty_state() {
    let state: State = State::new();

    let result = validate_vehicle_exists(&state, "AA111");

    assert_eq!(
        result.unwrap_err(),
        CoreError::VehicleNotFound {
            plate: String::from("AA111")
        }
    );
}
