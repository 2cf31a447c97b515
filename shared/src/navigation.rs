//! Hierarchical day / month / year navigation.

use serde::{Deserialize, Serialize};

use crate::calendar::{decade_start, CalendarDate};

/// Which granularity panel the picker is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Two adjacent month grids
    #[default]
    Day,
    /// Twelve months of one year
    Month,
    /// One decade plus a padding year on each side
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Prev,
    Next,
}

/// Inner (`<` / `>`) or outer (`«` / `»`) navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stride {
    Single,
    Double,
}

impl ViewMode {
    /// The level a title click leads to; `None` at the top
    pub fn drill_up(self) -> Option<ViewMode> {
        match self {
            ViewMode::Day => Some(ViewMode::Month),
            ViewMode::Month => Some(ViewMode::Year),
            ViewMode::Year => None,
        }
    }

    /// How far one press of a navigation control moves the anchor, in months
    pub fn stride_months(self, stride: Stride) -> i32 {
        match (self, stride) {
            (ViewMode::Day, Stride::Single) => 1,
            (ViewMode::Day, Stride::Double) => 12,
            (ViewMode::Month, Stride::Single) => 12,
            (ViewMode::Month, Stride::Double) => 120,
            (ViewMode::Year, Stride::Single) => 120,
            (ViewMode::Year, Stride::Double) => 1200,
        }
    }

    /// Unit name used in control labels ("Previous month", ...)
    pub fn unit(self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }

    /// Unit name the outer chevrons move by
    pub fn double_unit(self) -> &'static str {
        match self {
            ViewMode::Day => "year",
            ViewMode::Month => "decade",
            ViewMode::Year => "century",
        }
    }

    /// Label for the title control
    pub fn title_label(self) -> &'static str {
        match self {
            ViewMode::Day => "Select month",
            ViewMode::Month => "Select year",
            ViewMode::Year => "Select decade",
        }
    }
}

/// Navigator title for `view` anchored at `anchor`
pub fn title(view: ViewMode, anchor: CalendarDate) -> String {
    match view {
        ViewMode::Day => anchor.as_naive().format("%B %Y").to_string(),
        ViewMode::Month => anchor.year().to_string(),
        ViewMode::Year => {
            let start = decade_start(anchor.year());
            format!("{}-{}", start, start + 9)
        }
    }
}

/// Move the anchor one control press. Out-of-range moves leave it unchanged.
pub fn step(view: ViewMode, anchor: CalendarDate, direction: Direction, stride: Stride) -> CalendarDate {
    let months = view.stride_months(stride);
    let delta = match direction {
        Direction::Prev => -months,
        Direction::Next => months,
    };
    anchor.add_months(delta).unwrap_or(anchor)
}

/// Label for a navigation control, e.g. "Previous decade"
pub fn control_label(view: ViewMode, direction: Direction, stride: Stride) -> String {
    let verb = match direction {
        Direction::Prev => "Previous",
        Direction::Next => "Next",
    };
    let unit = match stride {
        Stride::Single => view.unit(),
        Stride::Double => view.double_unit(),
    };
    format!("{} {}", verb, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse_iso(s).unwrap()
    }

    #[test]
    fn test_drill_up() {
        assert_eq!(ViewMode::Day.drill_up(), Some(ViewMode::Month));
        assert_eq!(ViewMode::Month.drill_up(), Some(ViewMode::Year));
        assert_eq!(ViewMode::Year.drill_up(), None);
    }

    #[test]
    fn test_titles() {
        let anchor = date("2024-06-01");
        assert_eq!(title(ViewMode::Day, anchor), "June 2024");
        assert_eq!(title(ViewMode::Month, anchor), "2024");
        assert_eq!(title(ViewMode::Year, anchor), "2020-2029");
        assert_eq!(title(ViewMode::Year, date("2030-01-01")), "2030-2039");
    }

    #[test]
    fn test_single_steps() {
        let anchor = date("2024-12-01");
        assert_eq!(step(ViewMode::Day, anchor, Direction::Next, Stride::Single), date("2025-01-01"));
        assert_eq!(step(ViewMode::Day, anchor, Direction::Prev, Stride::Single), date("2024-11-01"));
        assert_eq!(step(ViewMode::Month, anchor, Direction::Next, Stride::Single), date("2025-12-01"));
        assert_eq!(step(ViewMode::Year, anchor, Direction::Prev, Stride::Single), date("2014-12-01"));
    }

    #[test]
    fn test_double_steps() {
        let anchor = date("2024-06-01");
        assert_eq!(step(ViewMode::Day, anchor, Direction::Prev, Stride::Double), date("2023-06-01"));
        assert_eq!(step(ViewMode::Month, anchor, Direction::Next, Stride::Double), date("2034-06-01"));
        assert_eq!(step(ViewMode::Year, anchor, Direction::Next, Stride::Double), date("2124-06-01"));
        assert_eq!(step(ViewMode::Year, anchor, Direction::Prev, Stride::Double), date("1924-06-01"));
    }

    #[test]
    fn test_step_saturates_at_representable_range() {
        let far = CalendarDate::from(chrono::NaiveDate::MAX).first_of_month();
        assert_eq!(step(ViewMode::Year, far, Direction::Next, Stride::Double), far);
    }

    #[test]
    fn test_control_labels() {
        assert_eq!(control_label(ViewMode::Day, Direction::Prev, Stride::Double), "Previous year");
        assert_eq!(control_label(ViewMode::Month, Direction::Next, Stride::Double), "Next decade");
        assert_eq!(control_label(ViewMode::Year, Direction::Next, Stride::Double), "Next century");
        assert_eq!(control_label(ViewMode::Month, Direction::Prev, Stride::Single), "Previous month");
        assert_eq!(ViewMode::Day.title_label(), "Select month");
    }
}
