//! Calendar arithmetic helpers.
//!
//! Pure functions over [`NaiveDate`] that every accrual rule is built from.
//! Dates carry no timezone, so results never depend on where or when the
//! engine runs.

use chrono::{Datelike, NaiveDate};

/// Clamps an integer input into `[min, max]`.
pub(crate) fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Counts calendar days from `start` to `end`, both inclusive.
///
/// Returns a value of zero or less when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::days_inclusive;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(days_inclusive(start, end), 29);
/// assert_eq!(days_inclusive(start, start), 1);
/// ```
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns the date `days` days after `date`.
///
/// Saturates at the ends of the representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(days))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Returns the anniversary of `start` in `year`.
///
/// A February 29 start falls on March 1 in non-leap years.
fn anniversary_in(start: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, start.month(), start.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(start)
}

/// Counts the anniversaries of `start` that fall on or before `end`.
///
/// Never negative.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::complete_years_between;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// assert_eq!(complete_years_between(hire, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()), 3);
/// assert_eq!(complete_years_between(hire, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()), 4);
/// ```
pub fn complete_years_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut years = end.year() - start.year();
    if anniversary_in(start, start.year() + years) > end {
        years -= 1;
    }
    i64::from(years.max(0))
}

/// Counts the distinct (year, month) pairs the interval `[start, end]` touches.
///
/// At least 1 when `start <= end`; zero or less otherwise.
pub fn months_touched(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month0()) - i64::from(start.month0());
    years * 12 + months + 1
}

/// Returns the first and last day of the month containing `date`.
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Counts calendar months whose overlap with `[start, end]` spans at least
/// `min_days` days, capped at 12.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::months_with_min_days;
/// use chrono::NaiveDate;
///
/// // Jan 1..=Mar 14: January and February count, March has only 14 days.
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert_eq!(months_with_min_days(start, end, 15), 2);
/// ```
pub fn months_with_min_days(start: NaiveDate, end: NaiveDate, min_days: i64) -> u32 {
    let mut count: u32 = 0;
    let (mut month_start, _) = month_bounds(start);

    while month_start <= end {
        let (_, month_end) = month_bounds(month_start);
        let overlap_start = start.max(month_start);
        let overlap_end = end.min(month_end);

        if overlap_end >= overlap_start && days_inclusive(overlap_start, overlap_end) >= min_days {
            count += 1;
        }

        match month_end.succ_opt() {
            Some(next) => month_start = next,
            None => break,
        }
    }

    count.min(12)
}

/// Counts calendar months overlapping `[start, end]` by at least 15 days,
/// capped at 12.
pub fn months_with_at_least_15_days(start: NaiveDate, end: NaiveDate) -> u32 {
    months_with_min_days(start, end, 15)
}
