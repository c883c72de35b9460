//! The closed recurrence-rule set and rule dispatch.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalDateError;
use crate::{fixed, monthly};

/// How an event repeats. Stored rule strings map 1:1 onto these variants
/// (`"daily"`, `"weekly"`, `"biweekly"`, `"monthly"`); anything else is a
/// data error surfaced by the [`FromStr`] impl, never silently coerced to
/// daily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Every day.
    Daily,
    /// Every 7 days, on the anchor's weekday.
    Weekly,
    /// Every 14 days, phase-locked to the anchor (not merely same weekday).
    Biweekly,
    /// The anchor's weekday in the anchor's week-of-month slot, each month.
    Monthly,
}

impl Recurrence {
    /// Enumerate this rule's occurrences within `[start, end]`, anchored to
    /// `target`.
    ///
    /// Ascending and duplicate-free; empty when the window is inverted or
    /// ends before the anchor's first occurrence.
    pub fn occurrences(
        self,
        start: NaiveDate,
        end: NaiveDate,
        target: NaiveDate,
    ) -> Vec<NaiveDate> {
        match self {
            Recurrence::Daily => fixed::daily(start, end, target),
            Recurrence::Weekly => fixed::weekly(start, end, target),
            Recurrence::Biweekly => fixed::biweekly(start, end, target),
            Recurrence::Monthly => monthly::monthly(start, end, target),
        }
    }

    /// The stored-string form of this rule.
    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Biweekly => "biweekly",
            Recurrence::Monthly => "monthly",
        }
    }
}

impl FromStr for Recurrence {
    type Err = CalDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "biweekly" => Ok(Recurrence::Biweekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(CalDateError::UnknownRule(other.to_string())),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
