// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar dates in `month/day/year` form.
//!
//! A [`Date`] is a plain triple. Parsing only checks that the text is three
//! integers separated by `/`; calendar validity is a separate question
//! answered by [`Date::is_valid`]. Bookings and vehicles only ever hold
//! valid dates, but lookups (cancel, return) may be given dates that are not.
//!
//! ## Invariants
//!
//! - Ordering is year, then month, then day.
//! - February has 29 days exactly when the year is a leap year.

use crate::error::DomainError;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const FOUR_YEAR_CYCLE: i32 = 4;
const HUNDRED_YEARS_EXCEPTION: i32 = 100;
const FOUR_HUNDRED_YEARS_RULE: i32 = 400;

/// A `(month, day, year)` calendar triple.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    /// Creates a date from its components without validating it.
    ///
    /// # Arguments
    ///
    /// * `month` - The month (1-12 for a valid date)
    /// * `day` - The day of the month
    /// * `year` - The year (positive for a valid date)
    #[must_use]
    pub const fn new(month: i32, day: i32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns the month component.
    #[must_use]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day component.
    #[must_use]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns whether this triple names a real calendar day.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        if self.year <= 0 {
            return false;
        }
        if self.month < 1 || self.month > 12 {
            return false;
        }
        self.day >= 1 && self.day <= days_in_month(self.month, self.year)
    }

    /// Parses `text` and rejects triples that are not real calendar days.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParse` if the text is not three integers
    /// separated by `/`, or `DomainError::InvalidCalendarDate` if it parses
    /// but fails [`Date::is_valid`].
    pub fn parse_valid(text: &str) -> Result<Self, DomainError> {
        let date: Self = text.parse()?;
        if !date.is_valid() {
            return Err(DomainError::InvalidCalendarDate {
                month: date.month,
                day: date.day,
                year: date.year,
            });
        }
        Ok(date)
    }

    /// Converts a valid date to a `chrono` date for day arithmetic.
    ///
    /// Returns `None` for invalid triples.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month: u32 = u32::try_from(self.month).ok()?;
        let day: u32 = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    /// Builds a date from a `chrono` date.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_naive_date(date: NaiveDate) -> Self {
        // month() and day() are at most 12 and 31
        Self::new(date.month() as i32, date.day() as i32, date.year())
    }

    /// Counts the calendar days from `self` to `end`, both ends included.
    ///
    /// `1/1/2025` to `1/1/2025` is one day; `1/1/2025` to `1/7/2025` is seven.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarDate` if either date is invalid.
    pub fn days_between_inclusive(&self, end: &Self) -> Result<i64, DomainError> {
        let from: NaiveDate = self.checked_naive()?;
        let to: NaiveDate = end.checked_naive()?;
        Ok((to - from).num_days() + 1)
    }

    /// Returns the date `months` calendar months later.
    ///
    /// Days past the end of the target month are clamped to its last day,
    /// so `11/30/2025` plus three months is `2/28/2026`.
    ///
    /// # Errors
    ///
    /// Returns an error if this date is invalid or the result overflows.
    pub fn add_months(&self, months: u32) -> Result<Self, DomainError> {
        let start: NaiveDate = self.checked_naive()?;
        let shifted: NaiveDate = start.checked_add_months(Months::new(months)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("adding {months} months to {self}"),
            }
        })?;
        Ok(Self::from_naive_date(shifted))
    }

    fn checked_naive(&self) -> Result<NaiveDate, DomainError> {
        self.to_naive_date()
            .ok_or(DomainError::InvalidCalendarDate {
                month: self.month,
                day: self.day,
                year: self.year,
            })
    }
}

/// Determines whether `year` is a leap year in the Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    if year % FOUR_YEAR_CYCLE != 0 {
        return false;
    }
    if year % HUNDRED_YEARS_EXCEPTION != 0 {
        return true;
    }
    year % FOUR_HUNDRED_YEARS_RULE == 0
}

const fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DomainError::DateParse {
            date_string: s.to_string(),
        };

        // Trailing empty fields and anything after the year are ignored
        let parts: Vec<&str> = s.trim_end_matches('/').split('/').collect();
        let [month, day, year, ..] = parts.as_slice() else {
            return Err(parse_error());
        };

        let month: i32 = month.parse().map_err(|_| parse_error())?;
        let day: i32 = day.parse().map_err(|_| parse_error())?;
        let year: i32 = year.parse().map_err(|_| parse_error())?;
        Ok(Self::new(month, day, year))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}
