//! Cell models for the day, month and year panels.
//!
//! These carry presentation state only. Each flag is derived from the host
//! value, today's date and the cell itself; nothing here feeds back into
//! selection behavior.

use serde::{Deserialize, Serialize};

use crate::calendar::{day_grid, decade_start, CalendarDate};
use crate::range::DateRangeValue;

/// How a day cell relates to the current range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySelection {
    #[default]
    None,
    Start,
    End,
    /// `from == to == cell`
    SingleDay,
    /// Strictly between the endpoints
    InRange,
}

impl DaySelection {
    pub fn is_endpoint(self) -> bool {
        matches!(self, DaySelection::Start | DaySelection::End | DaySelection::SingleDay)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for the muted padding days of the neighbouring months
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub selection: DaySelection,
}

/// One month grid of the day view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPanel {
    pub month: CalendarDate,
    pub title: String,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    /// 1-based month number within the browsed year
    pub month: u32,
    pub short_name: String,
    pub long_name: String,
    pub is_selected: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCell {
    pub year: i32,
    /// One of the two padding years around the decade
    pub outside_decade: bool,
    pub is_selected: bool,
    pub is_current: bool,
}

/// Selection state of `day` against `value`
pub fn day_selection(value: &DateRangeValue, day: CalendarDate) -> DaySelection {
    let is_from = value.from == Some(day);
    let is_to = value.to == Some(day);
    match (is_from, is_to) {
        (true, true) => DaySelection::SingleDay,
        (true, false) => DaySelection::Start,
        (false, true) => DaySelection::End,
        (false, false) if value.contains(day) => DaySelection::InRange,
        (false, false) => DaySelection::None,
    }
}

/// Build the 42-cell grid for the month containing `month`
pub fn day_panel(month: CalendarDate, value: &DateRangeValue, today: CalendarDate) -> DayPanel {
    let month = month.first_of_month();
    let cells = day_grid(month)
        .into_iter()
        .map(|date| DayCell {
            date,
            in_displayed_month: date.is_same_month(&month),
            is_today: date == today,
            selection: day_selection(value, date),
        })
        .collect();

    DayPanel {
        month,
        title: month.as_naive().format("%B %Y").to_string(),
        cells,
    }
}

/// The two side-by-side grids of the day view: `anchor` and the month after
pub fn day_view(anchor: CalendarDate, value: &DateRangeValue, today: CalendarDate) -> Vec<DayPanel> {
    let mut panels = vec![day_panel(anchor, value, today)];
    if let Some(next) = anchor.first_of_month().add_months(1) {
        panels.push(day_panel(next, value, today));
    }
    panels
}

/// Twelve months of the year `anchor` is in
pub fn month_panel(anchor: CalendarDate, value: &DateRangeValue, today: CalendarDate) -> Vec<MonthCell> {
    let start = anchor.first_of_month();
    (1..=12)
        .filter_map(|month| start.with_month(month))
        .map(|first| MonthCell {
            month: first.month(),
            short_name: first.as_naive().format("%b").to_string(),
            long_name: first.as_naive().format("%B").to_string(),
            is_selected: value.from.map_or(false, |from| from.is_same_month(&first)),
            is_current: today.is_same_month(&first),
        })
        .collect()
}

/// The decade containing `anchor`, plus one padding year on each side
pub fn year_panel(anchor: CalendarDate, value: &DateRangeValue, today: CalendarDate) -> Vec<YearCell> {
    let start = decade_start(anchor.year());
    (start - 1..=start + 10)
        .map(|year| YearCell {
            year,
            outside_decade: year < start || year >= start + 10,
            is_selected: value.from.map_or(false, |from| from.year() == year),
            is_current: today.year() == year,
        })
        .collect()
}
