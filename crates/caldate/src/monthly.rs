//! Month-anchored recurrence: the "Nth weekday of the month" pattern.
//!
//! The anchor date fixes both a weekday and a week-of-month slot
//! (`anchor.day / 7` full weeks into the month). An anchor late enough in
//! its month occupies a fifth slot that shorter months do not have; those
//! months contribute no occurrence.

use chrono::{Datelike, Duration, NaiveDate};

use crate::date::{end_of_month, start_of_month, start_of_next_month};

/// Enumerate the monthly recurrence matching `target`'s weekday and
/// week-of-month slot across all months overlapping `[start, end]`.
///
/// Each month contributes at most one date: the occurrence of `target`'s
/// weekday `target.day / 7` whole weeks into the month. Months where that
/// slot falls past the last day are skipped. The first month examined is
/// `target`'s own when `target > start`, otherwise `start`'s; the loop runs
/// while the month begins on or before `end`. Within the final month the
/// candidate is checked against the month bounds only — callers that clip by
/// month (the calendar views this feeds) rely on exactly that.
pub fn monthly(start: NaiveDate, end: NaiveDate, target: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    let week = i64::from(target.day() / 7);
    let target_dow = i64::from(target.weekday().num_days_from_monday());

    let mut month_start = if target > start {
        start_of_month(target)
    } else {
        start_of_month(start)
    };

    let mut out = Vec::new();
    while month_start <= end {
        // Days from the 1st to the first occurrence of the anchor's weekday.
        let month_dow = i64::from(month_start.weekday().num_days_from_monday());
        let ofs = if target_dow >= month_dow {
            target_dow - month_dow
        } else {
            7 - (month_dow - target_dow)
        };

        let candidate = month_start + Duration::days(week * 7 + ofs);
        if candidate <= end_of_month(month_start) {
            out.push(candidate);
        }
        month_start = start_of_next_month(month_start);
    }
    out
}
