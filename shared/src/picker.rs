//! Interaction state machine for the date-range picker.
//!
//! The picker is a controlled component: the host owns the committed
//! [`DateRangeValue`] and the picker owns only [`PickerViewState`]. Every user
//! action goes through [`reduce`], which returns the next view state and, when
//! the action completes a selection, the replacement value the host should
//! receive. Navigation and view switching never produce a value.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::navigation::{step, Direction, Stride, ViewMode};
use crate::presets::QuickSelect;
use crate::range::DateRangeValue;

/// Which endpoint the next day click sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    AwaitingStart,
    AwaitingEnd,
}

/// Transient interaction state, discarded on every close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickerViewState {
    pub is_open: bool,
    pub view_mode: ViewMode,
    /// First of the month shown in the left day panel
    pub anchor_month: CalendarDate,
    pub phase: SelectionPhase,
}

impl PickerViewState {
    /// Closed picker with default view state
    pub fn closed(value: &DateRangeValue, today: CalendarDate) -> Self {
        Self {
            is_open: false,
            view_mode: ViewMode::Day,
            anchor_month: default_anchor(value, today),
            phase: SelectionPhase::AwaitingStart,
        }
    }

    /// Freshly opened picker: day view, anchored on `from` or today
    pub fn opened(value: &DateRangeValue, today: CalendarDate) -> Self {
        Self {
            is_open: true,
            ..Self::closed(value, today)
        }
    }

    pub fn is_selecting_start(&self) -> bool {
        self.phase == SelectionPhase::AwaitingStart
    }
}

/// Month the day view opens on
pub fn default_anchor(value: &DateRangeValue, today: CalendarDate) -> CalendarDate {
    value.from.unwrap_or(today).first_of_month()
}

/// Everything the user can do to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerEvent {
    /// Click on the text-box-like trigger
    TriggerClick,
    DayClick(CalendarDate),
    /// 1-based month within the browsed year
    MonthClick(u32),
    YearClick(i32),
    TitleClick,
    Navigate(Direction, Stride),
    QuickSelect(QuickSelect),
    Clear,
    /// Mouse down anywhere outside the picker
    OutsideClick,
}

/// Result of one event: the next view state plus an optional value for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: PickerViewState,
    pub emit: Option<DateRangeValue>,
}

impl Transition {
    fn local(state: PickerViewState) -> Self {
        Self { state, emit: None }
    }

    fn emit(state: PickerViewState, value: DateRangeValue) -> Self {
        Self {
            state,
            emit: Some(value),
        }
    }

    /// Close and hand `value` to the host
    fn commit(value: DateRangeValue, today: CalendarDate) -> Self {
        Self::emit(PickerViewState::closed(&value, today), value)
    }
}

/// Apply `event` to `state` given the host's current `value`
pub fn reduce(
    state: &PickerViewState,
    event: PickerEvent,
    value: &DateRangeValue,
    today: CalendarDate,
) -> Transition {
    let transition = if state.is_open {
        reduce_open(state, event, value, today)
    } else {
        match event {
            PickerEvent::TriggerClick => Transition::local(PickerViewState::opened(value, today)),
            // The listener is detached while closed; nothing else can reach us
            _ => Transition::local(*state),
        }
    };

    tracing::debug!(
        ?event,
        phase = ?transition.state.phase,
        view = ?transition.state.view_mode,
        open = transition.state.is_open,
        emit = ?transition.emit,
        "date range picker transition"
    );
    transition
}

fn reduce_open(
    state: &PickerViewState,
    event: PickerEvent,
    value: &DateRangeValue,
    today: CalendarDate,
) -> Transition {
    match event {
        // Toggling closed mid-selection abandons the pending start
        PickerEvent::TriggerClick
            if state.phase == SelectionPhase::AwaitingEnd && value.is_partial() =>
        {
            Transition::commit(DateRangeValue::empty(), today)
        }
        PickerEvent::TriggerClick => Transition::local(PickerViewState::closed(value, today)),

        PickerEvent::DayClick(day) => match state.phase {
            SelectionPhase::AwaitingStart => Transition::emit(
                PickerViewState {
                    phase: SelectionPhase::AwaitingEnd,
                    ..*state
                },
                DateRangeValue::start_only(day),
            ),
            SelectionPhase::AwaitingEnd => {
                let range = match value.from {
                    // Start was cleared mid-selection
                    None => DateRangeValue::single_day(day),
                    // An earlier day finalizes a one-day range, it never re-enters AwaitingEnd
                    Some(start) if day < start => DateRangeValue::single_day(day),
                    Some(start) => DateRangeValue::between(start, day),
                };
                Transition::commit(range, today)
            }
        },

        PickerEvent::MonthClick(month) => match state.anchor_month.with_month(month) {
            Some(anchor_month) => Transition::local(PickerViewState {
                anchor_month,
                view_mode: ViewMode::Day,
                ..*state
            }),
            None => Transition::local(*state),
        },

        PickerEvent::YearClick(year) => match state.anchor_month.with_year(year) {
            Some(anchor_month) => Transition::local(PickerViewState {
                anchor_month,
                view_mode: ViewMode::Month,
                ..*state
            }),
            None => Transition::local(*state),
        },

        PickerEvent::TitleClick => match state.view_mode.drill_up() {
            Some(view_mode) => Transition::local(PickerViewState { view_mode, ..*state }),
            None => Transition::local(*state),
        },

        PickerEvent::Navigate(direction, stride) => Transition::local(PickerViewState {
            anchor_month: step(state.view_mode, state.anchor_month, direction, stride),
            ..*state
        }),

        PickerEvent::QuickSelect(preset) => Transition::commit(preset.range(today), today),

        PickerEvent::Clear => Transition::emit(*state, DateRangeValue::empty()),

        PickerEvent::OutsideClick => {
            if value.is_partial() {
                Transition::commit(DateRangeValue::empty(), today)
            } else {
                Transition::local(PickerViewState::closed(value, today))
            }
        }
    }
}

/// Stateful wrapper around [`reduce`] for hosts that don't keep the view
/// state themselves
#[derive(Debug, Clone)]
pub struct DateRangeSelector {
    state: PickerViewState,
}

impl DateRangeSelector {
    pub fn new(value: &DateRangeValue, today: CalendarDate) -> Self {
        Self {
            state: PickerViewState::closed(value, today),
        }
    }

    pub fn state(&self) -> &PickerViewState {
        &self.state
    }

    /// Process one event, returning the value to pass to the host's change
    /// callback, if any
    pub fn handle(
        &mut self,
        event: PickerEvent,
        value: &DateRangeValue,
        today: CalendarDate,
    ) -> Option<DateRangeValue> {
        let transition = reduce(&self.state, event, value, today);
        self.state = transition.state;
        transition.emit
    }
}
