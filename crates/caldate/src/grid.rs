//! Week and month grids for calendar view rendering.
//!
//! Weeks are Sunday through Saturday. Month grids include leading and
//! trailing days from the adjacent months so every row is a full week.

use chrono::{Duration, NaiveDate};

use crate::date::{end_of_month, end_of_week, start_of_month, start_of_week, week_dates};

/// The weeks covering `date`'s month, each a full Sunday..Saturday row.
///
/// The first row starts on the Sunday on/before the 1st; the last row ends
/// on the Saturday on/after the month's final day. Depending on alignment
/// and month length there are 4 to 6 rows.
pub fn month_grid(date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = start_of_week(start_of_month(date));
    let last = end_of_week(end_of_month(date));

    let mut weeks = Vec::new();
    let mut sunday = first;
    while sunday <= last {
        weeks.push(week_dates(sunday));
        sunday += Duration::days(7);
    }
    weeks
}
