// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::DateParse {
        date_string: String::from("x/y"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date 'x/y': expected month/day/year"
    );

    let err: DomainError = DomainError::InvalidCalendarDate {
        month: 2,
        day: 30,
        year: 2025,
    };
    assert_eq!(format!("{err}"), "2/30/2025 is not a valid calendar date");

    let err: DomainError = DomainError::UnknownMake(String::from("tesla"));
    assert_eq!(format!("{err}"), "Unknown make: tesla");

    let err: DomainError = DomainError::UnknownEmployee(String::from("smith"));
    assert_eq!(format!("{err}"), "Unknown employee: smith");

    let err: DomainError = DomainError::InvalidMileage(String::from("-1"));
    assert_eq!(format!("{err}"), "Invalid mileage: -1");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("adding 3 months to 12/31/262143"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while adding 3 months to 12/31/262143"
    );
}
