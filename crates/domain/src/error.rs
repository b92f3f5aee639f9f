// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors produced while parsing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The text is not a `month/day/year` triple of integers.
    DateParse {
        /// The text that failed to parse.
        date_string: String,
    },
    /// The triple parsed but does not name a real calendar day.
    InvalidCalendarDate {
        /// Month component as parsed.
        month: i32,
        /// Day component as parsed.
        day: i32,
        /// Year component as parsed.
        year: i32,
    },
    /// The make is not one of the known vehicle makes.
    UnknownMake(String),
    /// The identifier is not an eligible employee.
    UnknownEmployee(String),
    /// The mileage is not a positive integer.
    InvalidMileage(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse { date_string } => {
                write!(f, "Failed to parse date '{date_string}': expected month/day/year")
            }
            Self::InvalidCalendarDate { month, day, year } => {
                write!(f, "{month}/{day}/{year} is not a valid calendar date")
            }
            Self::UnknownMake(make) => write!(f, "Unknown make: {make}"),
            Self::UnknownEmployee(employee) => write!(f, "Unknown employee: {employee}"),
            Self::InvalidMileage(mileage) => write!(f, "Invalid mileage: {mileage}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
