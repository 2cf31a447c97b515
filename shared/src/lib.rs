//! DOM-free core of the QA Playground date-range picker.
//!
//! The frontend renders what these modules compute and forwards clicks to
//! [`picker::DateRangeSelector`]; everything here also runs natively for tests.

pub mod calendar;
pub mod config;
pub mod error;
pub mod navigation;
pub mod panels;
pub mod picker;
pub mod presets;
pub mod range;

pub use calendar::{CalendarDate, DAY_GRID_CELLS, DISPLAY_PLACEHOLDER, WEEKDAY_HEADERS};
pub use config::PickerConfig;
pub use error::{DateError, DateResult};
pub use navigation::{Direction, Stride, ViewMode};
pub use panels::{DayCell, DayPanel, DaySelection, MonthCell, YearCell};
pub use picker::{reduce, DateRangeSelector, PickerEvent, PickerViewState, SelectionPhase, Transition};
pub use presets::QuickSelect;
pub use range::{validate_range, DateRangeValue};
