//! Pure calendar arithmetic for monthly schedules.
//!
//! Two total functions drive calendar rendering and date validation:
//! [`days_in_month`] and [`first_weekday_offset`]. Both take a month in
//! 1-12; passing a month outside that range is a caller error and the
//! result is unspecified (callers validate via [`crate::models::ScheduleKey`]).

use chrono::{Datelike, NaiveDate};

/// Returns true if `year` is a Gregorian leap year.
///
/// # Examples
///
/// ```
/// use roster_engine::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2025));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month (month in 1-12).
///
/// # Examples
///
/// ```
/// use roster_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2025, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the zero-based weekday of the 1st of the month, Monday = 0.
///
/// Calendar grids render Monday-first, so the offset counts empty leading
/// cells before day 1.
///
/// # Examples
///
/// ```
/// use roster_engine::calendar::first_weekday_offset;
///
/// // 2025-01-01 is a Wednesday
/// assert_eq!(first_weekday_offset(2025, 1), 2);
/// ```
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_february_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_fixed_length_months() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 6), 30);
        assert_eq!(days_in_month(2025, 7), 31);
        assert_eq!(days_in_month(2025, 9), 30);
        assert_eq!(days_in_month(2025, 11), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_first_weekday_offset_known_dates() {
        // 2025-01-01 is a Wednesday
        assert_eq!(first_weekday_offset(2025, 1), 2);
        // 2024-01-01 is a Monday
        assert_eq!(first_weekday_offset(2024, 1), 0);
        // 2025-06-01 is a Sunday
        assert_eq!(first_weekday_offset(2025, 6), 6);
        // 2025-03-01 is a Saturday
        assert_eq!(first_weekday_offset(2025, 3), 5);
    }

    proptest! {
        #[test]
        fn prop_days_in_month_matches_chrono(year in 1970i32..2100, month in 1u32..=12) {
            // The day after the last day must land in the next month.
            let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap();
            let next = last.succ_opt().unwrap();
            prop_assert_eq!(next.day(), 1);
        }

        #[test]
        fn prop_offset_in_range(year in 1970i32..2100, month in 1u32..=12) {
            prop_assert!(first_weekday_offset(year, month) <= 6);
        }

        #[test]
        fn prop_offset_advances_with_month_length(year in 1970i32..2100, month in 1u32..=11) {
            // Next month's offset is this month's offset plus its length, mod 7.
            let expected = (first_weekday_offset(year, month) + days_in_month(year, month)) % 7;
            prop_assert_eq!(first_weekday_offset(year, month + 1), expected);
        }
    }
}
