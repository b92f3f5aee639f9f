// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::Date;
use crate::error::DomainError;

/// Longest booking allowed, in calendar days counting both ends.
pub const MAX_BOOKING_DAYS: i64 = 7;

/// How many calendar months ahead of today a booking may begin.
pub const ADVANCE_BOOKING_MONTHS: u32 = 3;

/// Returns whether the inclusive intervals `[a_begin, a_end]` and
/// `[b_begin, b_end]` share at least one day.
///
/// The test is symmetric, and intervals that only touch at an endpoint overlap.
#[must_use]
pub fn intervals_overlap(a_begin: &Date, a_end: &Date, b_begin: &Date, b_end: &Date) -> bool {
    a_begin <= b_end && b_begin <= a_end
}

/// Parses an odometer reading.
///
/// # Arguments
///
/// * `text` - The mileage as typed
///
/// # Returns
///
/// * `Ok(mileage)` for a positive integer
/// * `Err(DomainError::InvalidMileage)` otherwise
///
/// # Errors
///
/// Returns an error if the text is not an integer, is not greater than zero,
/// or does not fit in an `i32`.
pub fn parse_mileage(text: &str) -> Result<u32, DomainError> {
    text.parse::<i32>()
        .ok()
        .filter(|mileage| *mileage > 0)
        .and_then(|mileage| u32::try_from(mileage).ok())
        .ok_or_else(|| DomainError::InvalidMileage(text.to_string()))
}

/// Validates that a booking fits within [`MAX_BOOKING_DAYS`].
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if either date is invalid.
/// A booking that is too long is reported as `Ok(false)`.
pub fn is_within_max_duration(begin: &Date, end: &Date) -> Result<bool, DomainError> {
    Ok(begin.days_between_inclusive(end)? <= MAX_BOOKING_DAYS)
}
