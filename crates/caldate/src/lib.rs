//! # caldate
//!
//! Deterministic recurrence-date engine for event calendars.
//!
//! Given a query window `[start, end]` (inclusive on both ends) and an anchor
//! `target` date, the engine enumerates every calendar date on which a
//! recurring event occurs: daily, weekly, biweekly (exact 14-day phase lock,
//! not merely same weekday), or "Nth weekday of the month". Companion helpers
//! compute week and month boundaries for calendar-grid rendering
//! (Sunday-first weeks).
//!
//! All functions are pure and synchronous: plain [`chrono::NaiveDate`] in,
//! sorted duplicate-free `Vec<NaiveDate>` out. No time-of-day, no timezones,
//! no shared state — safe to call from any number of threads.
//!
//! ## Quick start
//!
//! ```rust
//! use caldate::{parse_date, Recurrence};
//!
//! let start = parse_date("2009-04-01").unwrap();
//! let end = parse_date("2009-04-30").unwrap();
//! let target = parse_date("2009-04-10").unwrap();
//!
//! let dates = Recurrence::Weekly.occurrences(start, end, target);
//! assert_eq!(dates.len(), 3); // Apr 10, 17, 24
//! ```
//!
//! ## Modules
//!
//! - [`fixed`] — fixed-period recurrence (daily / weekly / biweekly)
//! - [`monthly`] — month-anchored "Nth weekday of the month" recurrence
//! - [`rule`] — the closed [`Recurrence`] rule set and dispatch
//! - [`date`] — date parsing and week/month boundary primitives
//! - [`grid`] — week and month grids for view rendering
//! - [`expand`] — expanding event rows into per-day occurrence buckets
//! - [`error`] — error types

pub mod date;
pub mod error;
pub mod expand;
pub mod fixed;
pub mod grid;
pub mod monthly;
pub mod rule;

pub use date::{
    end_of_month, end_of_week, parse_date, start_of_month, start_of_next_month, start_of_week,
    week_dates,
};
pub use error::CalDateError;
pub use expand::{expand_event, occurrences_by_day, EventSpan};
pub use fixed::{biweekly, daily, fixed_interval, weekly};
pub use grid::month_grid;
pub use monthly::monthly;
pub use rule::Recurrence;
