use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::range::DateRangeValue;

/// One-click ranges ending today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickSelect {
    Today,
    Last7Days,
    Last30Days,
}

impl QuickSelect {
    pub const ALL: [QuickSelect; 3] = [QuickSelect::Today, QuickSelect::Last7Days, QuickSelect::Last30Days];

    /// Number of days covered, counting today
    pub fn span_days(self) -> i64 {
        match self {
            QuickSelect::Today => 1,
            QuickSelect::Last7Days => 7,
            QuickSelect::Last30Days => 30,
        }
    }

    /// The inclusive range this preset selects relative to `today`
    pub fn range(self, today: CalendarDate) -> DateRangeValue {
        let from = today.add_days(1 - self.span_days()).unwrap_or(today);
        DateRangeValue::between(from, today)
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickSelect::Today => "Today",
            QuickSelect::Last7Days => "Last 7 days",
            QuickSelect::Last30Days => "Last 30 days",
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            QuickSelect::Today => "quick-select-today",
            QuickSelect::Last7Days => "quick-select-last7",
            QuickSelect::Last30Days => "quick-select-last30",
        }
    }
}
