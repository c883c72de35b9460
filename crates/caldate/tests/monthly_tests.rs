//! Tests for month-anchored "Nth weekday of the month" recurrence.
//!
//! The anchor fixes a weekday and a week-of-month slot; each month in the
//! window contributes at most one occurrence, and months too short for the
//! slot contribute none.

use caldate::monthly;
use chrono::{Datelike, NaiveDate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

#[test]
fn first_wednesday_pattern() {
    // Anchor Wed 2009-04-01 (first Wednesday slot) → first Wednesday of May.
    let result = monthly(d(2009, 5, 1), d(2009, 5, 31), d(2009, 4, 1));
    assert_eq!(result, vec![d(2009, 5, 6)]);
}

#[test]
fn occurrence_weekday_matches_anchor() {
    let target = d(2009, 4, 1);
    let result = monthly(d(2009, 5, 1), d(2009, 5, 31), target);
    assert_eq!(result[0].weekday(), target.weekday());
}

#[test]
fn third_wednesday_pattern() {
    // Anchor Wed 2009-04-15 → 2009-05-20, the matching slot in May.
    let result = monthly(d(2009, 5, 1), d(2009, 5, 31), d(2009, 4, 15));
    assert_eq!(result, vec![d(2009, 5, 20)]);
}

#[test]
fn fifth_slot_overflows_may_and_june() {
    // Anchor Thu 2009-04-30 sits in a fifth slot. May's candidate lands in
    // June and June's in July, so neither month qualifies.
    assert!(monthly(d(2009, 5, 1), d(2009, 5, 31), d(2009, 4, 30)).is_empty());
    assert!(monthly(d(2009, 5, 1), d(2009, 6, 30), d(2009, 4, 30)).is_empty());
}

#[test]
fn fifth_slot_fits_in_july() {
    // Same fifth-slot anchor: July is long enough and aligned.
    let result = monthly(d(2009, 5, 1), d(2009, 7, 31), d(2009, 4, 30));
    assert_eq!(result, vec![d(2009, 7, 30)]);
}

#[test]
fn second_tuesday_across_three_months() {
    let result = monthly(d(2009, 5, 1), d(2009, 7, 31), d(2009, 5, 12));
    assert_eq!(result, vec![d(2009, 5, 12), d(2009, 6, 9), d(2009, 7, 14)]);
}

#[test]
fn anchor_inside_window_recurs_on_itself_first() {
    let target = d(2009, 5, 12);
    let result = monthly(d(2009, 5, 1), d(2009, 7, 31), target);
    assert_eq!(result[0], target);
}

#[test]
fn anchor_on_thirty_first_skips_short_months() {
    // Fri 2009-07-31 occupies the fifth Friday slot. August's candidate
    // lands in September and September's in October, so both are skipped;
    // October's first Friday is Oct 2, putting the fifth slot on Oct 30.
    let target = d(2009, 7, 31);
    assert!(monthly(d(2009, 8, 1), d(2009, 9, 30), target).is_empty());

    let result = monthly(d(2009, 8, 1), d(2009, 10, 31), target);
    assert_eq!(result, vec![d(2009, 10, 30)]);
    assert_eq!(result[0].weekday(), target.weekday());
}

#[test]
fn at_most_one_occurrence_per_month() {
    let result = monthly(d(2009, 1, 1), d(2009, 12, 31), d(2009, 1, 20));
    let mut months: Vec<(i32, u32)> = result.iter().map(|d| (d.year(), d.month())).collect();
    let before = months.len();
    months.dedup();
    assert_eq!(months.len(), before, "a month contributed twice");
}

#[test]
fn results_are_ascending() {
    let result = monthly(d(2009, 1, 1), d(2009, 12, 31), d(2009, 1, 20));
    for pair in result.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn inverted_window_is_empty() {
    assert!(monthly(d(2009, 5, 31), d(2009, 5, 1), d(2009, 5, 12)).is_empty());
}

#[test]
fn december_anchor_wraps_into_next_year() {
    // Anchor Tue 2009-12-08 (second Tuesday slot) → second Tuesday of Jan.
    let result = monthly(d(2010, 1, 1), d(2010, 1, 31), d(2009, 12, 8));
    assert_eq!(result, vec![d(2010, 1, 12)]);
}
