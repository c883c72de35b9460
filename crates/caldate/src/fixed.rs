//! Fixed-period recurrence: daily, weekly, and biweekly enumeration.
//!
//! Weekly and biweekly occurrences are phase-locked to the anchor date
//! modulo the period: a biweekly anchor and the same weekday seven days
//! later do NOT match. Daily is deliberately different — it carries no phase
//! at all and lists every day from `max(start, target)` through `end`.

use chrono::{Duration, NaiveDate};

/// Enumerate a fixed-period recurrence within `[start, end]`, inclusive.
///
/// Occurrences are the window dates `d` with `d >= target` and `d` aligned
/// to the anchor modulo `period_days` (the anchor may lie before the window;
/// a non-negative modulo carries the phase forward). Returns ascending,
/// duplicate-free dates; empty when `target > end` or `start > end`.
///
/// # Panics
/// Panics if `period_days < 1`. The closed rule set only produces periods of
/// 1, 7, or 14, so anything else is a defect in the caller.
pub fn fixed_interval(
    start: NaiveDate,
    end: NaiveDate,
    target: NaiveDate,
    period_days: i64,
) -> Vec<NaiveDate> {
    assert!(
        period_days >= 1,
        "recurrence period must be positive, got {period_days}"
    );

    let mut out = Vec::new();
    if target > end {
        return out;
    }

    let lo = start.max(target);
    // First window date phase-aligned with the anchor.
    let mut day = lo + Duration::days((target - lo).num_days().rem_euclid(period_days));
    while day <= end {
        out.push(day);
        day += Duration::days(period_days);
    }
    out
}

/// Every single day from `max(start, target)` through `end`, inclusive.
///
/// Unlike [`weekly`] and [`biweekly`], daily recurrence ignores the anchor's
/// phase entirely — the anchor only clips the front of the window.
pub fn daily(start: NaiveDate, end: NaiveDate, target: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut day = start.max(target);
    while day <= end {
        out.push(day);
        day += Duration::days(1);
    }
    out
}

/// All dates in `[start, end]` sharing the anchor's weekday.
pub fn weekly(start: NaiveDate, end: NaiveDate, target: NaiveDate) -> Vec<NaiveDate> {
    fixed_interval(start, end, target, 7)
}

/// Alternate weeks: dates at exact 14-day offsets from the anchor.
pub fn biweekly(start: NaiveDate, end: NaiveDate, target: NaiveDate) -> Vec<NaiveDate> {
    fixed_interval(start, end, target, 14)
}
