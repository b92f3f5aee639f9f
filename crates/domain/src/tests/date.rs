// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Date, DomainError, is_leap_year};
use chrono::NaiveDate;

#[test]
fn test_leap_year_rule() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2100));
}

#[test]
fn test_thirty_day_month_rejects_day_31() {
    assert!(!Date::new(6, 31, 2000).is_valid());
    assert!(Date::new(6, 30, 2000).is_valid());
}

#[test]
fn test_february_29_depends_on_leap_year() {
    assert!(Date::new(2, 29, 2024).is_valid());
    assert!(!Date::new(2, 29, 1999).is_valid());
    assert!(!Date::new(2, 29, 1900).is_valid());
    assert!(Date::new(2, 29, 2000).is_valid());
}

#[test]
fn test_out_of_range_components_are_invalid() {
    assert!(!Date::new(1, 1, 0).is_valid());
    assert!(!Date::new(13, 19, 2000).is_valid());
    assert!(!Date::new(0, 10, 2000).is_valid());
    assert!(!Date::new(1, 0, 2000).is_valid());
    assert!(!Date::new(1, 32, 2000).is_valid());
    assert!(Date::new(12, 31, 2025).is_valid());
}

#[test]
fn test_parse_accepts_unpadded_and_padded_components() {
    let date: Date = "1/5/2025".parse().unwrap();
    assert_eq!(date, Date::new(1, 5, 2025));

    let padded: Date = "01/05/2025".parse().unwrap();
    assert_eq!(padded, date);
}

#[test]
fn test_parse_does_not_validate_calendar() {
    let date: Date = "2/30/2025".parse().unwrap();
    assert_eq!(date.month(), 2);
    assert_eq!(date.day(), 30);
    assert_eq!(date.year(), 2025);
    assert!(!date.is_valid());
}

#[test]
fn test_parse_rejects_malformed_text() {
    for text in ["", "1/5", "1/5/", "/1/5/2025", "a/b/c", "1-5-2025", "1//2025"] {
        let result: Result<Date, DomainError> = text.parse();
        assert!(
            matches!(result, Err(DomainError::DateParse { .. })),
            "expected parse error for {text:?}"
        );
    }
}

#[test]
fn test_parse_ignores_trailing_fields() {
    assert_eq!("1/1/2020/".parse::<Date>().unwrap(), Date::new(1, 1, 2020));
    assert_eq!("1/1/2020//".parse::<Date>().unwrap(), Date::new(1, 1, 2020));
    assert_eq!("1/5/2025/1".parse::<Date>().unwrap(), Date::new(1, 5, 2025));
    assert_eq!("1/5/2025/x/".parse::<Date>().unwrap(), Date::new(1, 5, 2025));
}

#[test]
fn test_parse_valid_rejects_invalid_calendar_date() {
    let result: Result<Date, DomainError> = Date::parse_valid("6/31/2000");
    assert_eq!(
        result,
        Err(DomainError::InvalidCalendarDate {
            month: 6,
            day: 31,
            year: 2000,
        })
    );
    assert!(Date::parse_valid("6/30/2000").is_ok());
}

#[test]
fn test_ordering_is_year_then_month_then_day() {
    assert!(Date::new(12, 31, 2024) < Date::new(1, 1, 2025));
    assert!(Date::new(1, 31, 2025) < Date::new(2, 1, 2025));
    assert!(Date::new(2, 1, 2025) < Date::new(2, 2, 2025));
    assert_eq!(
        Date::new(3, 3, 2025).cmp(&Date::new(3, 3, 2025)),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_display_is_unpadded() {
    assert_eq!(Date::new(1, 5, 2025).to_string(), "1/5/2025");
    assert_eq!(Date::new(12, 25, 2025).to_string(), "12/25/2025");
}

#[test]
fn test_days_between_inclusive() {
    let begin: Date = Date::new(1, 1, 2025);
    assert_eq!(begin.days_between_inclusive(&begin).unwrap(), 1);
    assert_eq!(
        begin.days_between_inclusive(&Date::new(1, 7, 2025)).unwrap(),
        7
    );
    assert_eq!(
        Date::new(12, 30, 2024)
            .days_between_inclusive(&Date::new(1, 2, 2025))
            .unwrap(),
        4
    );
    assert_eq!(
        Date::new(2, 27, 2024)
            .days_between_inclusive(&Date::new(3, 1, 2024))
            .unwrap(),
        4
    );
}

#[test]
fn test_days_between_rejects_invalid_dates() {
    let result = Date::new(2, 30, 2025).days_between_inclusive(&Date::new(3, 1, 2025));
    assert!(matches!(
        result,
        Err(DomainError::InvalidCalendarDate { .. })
    ));
}

#[test]
fn test_add_months_clamps_to_month_end() {
    assert_eq!(
        Date::new(11, 30, 2025).add_months(3).unwrap(),
        Date::new(2, 28, 2026)
    );
    assert_eq!(
        Date::new(11, 30, 2023).add_months(3).unwrap(),
        Date::new(2, 29, 2024)
    );
    assert_eq!(
        Date::new(10, 18, 2026).add_months(3).unwrap(),
        Date::new(1, 18, 2027)
    );
}

#[test]
fn test_naive_date_conversion() {
    let naive: NaiveDate = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let date: Date = Date::from_naive_date(naive);
    assert_eq!(date, Date::new(10, 18, 2026));
    assert_eq!(date.to_naive_date(), Some(naive));
    assert_eq!(Date::new(2, 30, 2026).to_naive_date(), None);
}
