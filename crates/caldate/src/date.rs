//! Date parsing and week/month boundary primitives.
//!
//! Everything operates on plain [`chrono::NaiveDate`] — proleptic Gregorian
//! dates with no time-of-day attached. Day arithmetic (shift by N days,
//! signed day difference, total ordering) comes from `chrono` itself; this
//! module adds the boundary helpers the recurrence and grid code builds on.
//!
//! Weeks run Sunday through Saturday. That convention is a fixed constant of
//! the crate, matching the calendar views this engine feeds.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{CalDateError, Result};

/// Parse a `YYYY-MM-DD` or `YYYY/MM/DD` date string.
///
/// Single-digit months and days are accepted (`2009-4-1`), and the two
/// separator characters may be mixed, matching the permissive upstream
/// format.
///
/// # Errors
/// Returns [`CalDateError::InvalidDate`] when the string does not split into
/// exactly three integer fields, or names an impossible date (e.g. Feb 30).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let invalid = || CalDateError::InvalidDate(s.to_string());

    let mut fields = s.split(['-', '/']);
    let (Some(y), Some(m), Some(d), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };

    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// The first day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day()) - 1)
}

/// The first day of the month after `date`'s. December wraps to January of
/// the next year.
pub fn start_of_next_month(date: NaiveDate) -> NaiveDate {
    // The 1st plus 31 days always lands inside the following month.
    start_of_month(start_of_month(date) + Duration::days(31))
}

/// The last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_next_month(date) - Duration::days(1)
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    // ISO weekday mod 7: Monday=1 .. Saturday=6, Sunday=0.
    let offset = i64::from(date.weekday().number_from_monday() % 7);
    date - Duration::days(offset)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// The seven dates of `date`'s week, Sunday through Saturday.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = start_of_week(date);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}
