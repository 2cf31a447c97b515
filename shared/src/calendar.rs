//! Day-granularity calendar arithmetic used by the date-range picker.
//!
//! Everything here is pure: "today" is always passed in by the caller so the
//! same code runs natively in tests and in the browser.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DateError, DateResult};

/// Number of cells in a day panel: six full weeks
pub const DAY_GRID_CELLS: usize = 42;

/// Weekday column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Placeholder shown for an empty side of the range
pub const DISPLAY_PLACEHOLDER: &str = "dd/mm/yyyy";

/// A calendar day with no time-of-day component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, rejecting days that don't exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::OutOfRange { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` string
    pub fn parse_iso(value: &str) -> DateResult<Self> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::InvalidFormat(trimmed.to_string()))
    }

    /// Format as `YYYY-MM-DD`, the host value contract
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Format as `dd/mm/yyyy` for the trigger display
    pub fn to_display(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }

    /// Long form used for accessibility labels, e.g. "June 15, 2024"
    pub fn to_long(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 0 = Sunday, 1 = Monday, etc.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// First day of this date's month
    pub fn first_of_month(&self) -> Self {
        self.0.with_day(1).map(Self).unwrap_or(*self)
    }

    pub fn is_same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Shift by whole months, clamping the day to the target month's length.
    /// Returns `None` when the result is not representable.
    pub fn add_months(&self, months: i32) -> Option<Self> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self)
    }

    pub fn add_years(&self, years: i32) -> Option<Self> {
        years.checked_mul(12).and_then(|months| self.add_months(months))
    }

    pub fn add_days(&self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Same day and year in another month (1-based)
    pub fn with_month(&self, month: u32) -> Option<Self> {
        self.0.with_month(month).map(Self)
    }

    pub fn with_year(&self, year: i32) -> Option<Self> {
        self.0.with_year(year).map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

/// First year of the decade containing `year` (2024 -> 2020, -5 -> -10)
pub fn decade_start(year: i32) -> i32 {
    year - year.rem_euclid(10)
}

/// The Sunday on or before the first of `month`'s month
pub fn grid_start(month: CalendarDate) -> CalendarDate {
    let first = month.first_of_month();
    first
        .add_days(-i64::from(first.weekday_from_sunday()))
        .unwrap_or(first)
}

/// The 42 consecutive days shown for `month`, starting at [`grid_start`].
/// Near the edge of the representable range the grid may come up short.
pub fn day_grid(month: CalendarDate) -> Vec<CalendarDate> {
    let start = grid_start(month);
    (0..DAY_GRID_CELLS as i64)
        .filter_map(|offset| start.add_days(offset))
        .collect()
}

/// Format an optional date for display, falling back to the placeholder
pub fn display_or_placeholder(date: Option<CalendarDate>) -> String {
    date.map(|d| d.to_display())
        .unwrap_or_else(|| DISPLAY_PLACEHOLDER.to_string())
}
