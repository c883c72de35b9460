//! Expanding event rows into concrete occurrence dates.
//!
//! The fetch layer hands this module rows shaped like
//! `{start, end, recurrence}`. Expansion turns each row into the dates it
//! occurs on inside a query window, and [`occurrences_by_day`] buckets those
//! dates for month/week/day view population.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rule::Recurrence;

/// An event row after fetching: the span it covers and how it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpan {
    /// First date of the event. Also the recurrence anchor.
    pub start: NaiveDate,
    /// Last date on which the event can occur.
    pub end: NaiveDate,
    /// How the event repeats between `start` and `end`.
    pub recurrence: Recurrence,
}

/// The dates in `[window_start, window_end]` on which `event` occurs.
///
/// The effective window is clipped to the event's own end date, and the
/// event's start acts as the recurrence anchor, so occurrences never precede
/// it.
pub fn expand_event(
    event: &EventSpan,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<NaiveDate> {
    let last = window_end.min(event.end);
    event.recurrence.occurrences(window_start, last, event.start)
}

/// Bucket the occurrences of several events by day.
///
/// Maps each date with at least one occurrence to the indices (into
/// `events`) of the events occurring that day, in input order. Days without
/// occurrences are absent; iteration is ascending by date.
pub fn occurrences_by_day(
    events: &[EventSpan],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<usize>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (idx, event) in events.iter().enumerate() {
        for day in expand_event(event, window_start, window_end) {
            by_day.entry(day).or_default().push(idx);
        }
    }
    by_day
}
