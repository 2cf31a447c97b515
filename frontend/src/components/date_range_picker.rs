use shared::calendar::display_or_placeholder;
use shared::navigation::{control_label, title};
use shared::panels::{day_view, month_panel, year_panel};
use shared::{
    CalendarDate, DateRangeSelector, DateRangeValue, DayPanel, DaySelection, Direction, PickerConfig,
    PickerEvent, PickerViewState, QuickSelect, Stride, ViewMode, WEEKDAY_HEADERS,
};
use yew::prelude::*;

use crate::hooks::use_outside_click::use_outside_click;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "date-range-picker";

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Optional label above the trigger
    #[prop_or_default]
    pub label: Option<String>,
    /// Range start in YYYY-MM-DD format, or "" when empty
    pub from_value: String,
    /// Range end in YYYY-MM-DD format, or "" when empty
    pub to_value: String,
    /// Called once per completed action with the new (from, to) pair
    pub on_change: Callback<(String, String)>,
    /// Validation message from the host, rendered verbatim
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub config: PickerConfig,
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let picker_ref = use_node_ref();
    let today = today();
    let value = DateRangeValue::from_iso_pair(&props.from_value, &props.to_value);
    let selector = use_state(|| DateRangeSelector::new(&value, today));
    let view_state = *selector.state();

    // Every interaction goes through the selector; only completed actions reach the host
    let dispatch = {
        let selector = selector.clone();
        let on_change = props.on_change.clone();
        let enable_logging = props.config.enable_logging;
        Callback::from(move |event: PickerEvent| {
            let mut next = (*selector).clone();
            let emitted = next.handle(event, &value, today);

            let was_open = selector.state().is_open;
            if enable_logging && next.state().is_open != was_open {
                let verb = if next.state().is_open { "opened" } else { "closed" };
                Logger::info_with_component(COMPONENT, &format!("Picker {}", verb));
            }

            selector.set(next);
            if let Some(range) = emitted {
                on_change.emit(range.to_iso_pair());
            }
        })
    };

    use_outside_click(
        picker_ref.clone(),
        view_state.is_open,
        dispatch.reform(|_| PickerEvent::OutsideClick),
    );

    let on_trigger_click = dispatch.reform(|_: MouseEvent| PickerEvent::TriggerClick);
    let has_error = props.error.as_ref().map_or(false, |e| !e.is_empty());

    html! {
        <div class="date-range-picker" ref={picker_ref}>
            {if let Some(label) = &props.label {
                html! { <label class="date-range-picker-label">{label}</label> }
            } else { html! {} }}

            <div
                class={classes!("date-range-display", has_error.then(|| "has-error"))}
                onclick={on_trigger_click}
                title={value.display()}
                aria-haspopup="dialog"
                aria-expanded={view_state.is_open.to_string()}
                data-testid="date-range-display"
            >
                {render_range_summary(&value)}
                <span class="calendar-icon">{"📅"}</span>
            </div>

            {if has_error {
                html! { <p class="date-range-error" role="alert">{props.error.clone().unwrap_or_default()}</p> }
            } else { html! {} }}

            {if view_state.is_open {
                html! {
                    <div class="date-range-picker-panel" data-testid="date-range-picker-panel">
                        <div class="quick-select-row">
                            {for props.config.presets.iter().map(|preset| render_preset(*preset, &dispatch))}
                            <div class="spacer"></div>
                            <div class="selected-range-summary">
                                {render_range_summary(&value)}
                                {if value.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <button
                                            type="button"
                                            class="clear-button"
                                            onclick={dispatch.reform(|_: MouseEvent| PickerEvent::Clear)}
                                            aria-label="Clear dates"
                                        >
                                            {"✕"}
                                        </button>
                                    }
                                }}
                            </div>
                        </div>

                        <p class="selection-hint" data-testid="selection-hint">
                            {if view_state.is_selecting_start() { "Select start date" } else { "Select end date" }}
                        </p>

                        {render_navigation_header(&view_state, &dispatch)}

                        {match view_state.view_mode {
                            ViewMode::Day => html! {
                                <div class="day-panels">
                                    {for day_view(view_state.anchor_month, &value, today)
                                        .into_iter()
                                        .map(|panel| render_day_panel(&panel, &dispatch))}
                                </div>
                            },
                            ViewMode::Month => render_month_panel(view_state.anchor_month, &value, today, &dispatch),
                            ViewMode::Year => render_year_panel(view_state.anchor_month, &value, today, &dispatch),
                        }}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

fn render_range_summary(value: &DateRangeValue) -> Html {
    html! {
        <span class="date-range-text">
            <span class="date-range-from">{display_or_placeholder(value.from)}</span>
            {" → "}
            <span class="date-range-to">{display_or_placeholder(value.to)}</span>
        </span>
    }
}

fn render_preset(preset: QuickSelect, dispatch: &Callback<PickerEvent>) -> Html {
    html! {
        <button
            type="button"
            class="quick-select-button"
            onclick={dispatch.reform(move |_: MouseEvent| PickerEvent::QuickSelect(preset))}
            data-testid={preset.test_id()}
        >
            {preset.label()}
        </button>
    }
}

fn render_navigation_header(state: &PickerViewState, dispatch: &Callback<PickerEvent>) -> Html {
    let view = state.view_mode;
    let nav_button = |direction: Direction, stride: Stride, glyph: &'static str| {
        html! {
            <button
                type="button"
                class="nav-button"
                onclick={dispatch.reform(move |_: MouseEvent| PickerEvent::Navigate(direction, stride))}
                aria-label={control_label(view, direction, stride)}
            >
                {glyph}
            </button>
        }
    };

    html! {
        <div class="calendar-navigation">
            <div class="nav-group">
                {nav_button(Direction::Prev, Stride::Double, "«")}
                {nav_button(Direction::Prev, Stride::Single, "‹")}
            </div>
            <button
                type="button"
                class="nav-title"
                onclick={dispatch.reform(|_: MouseEvent| PickerEvent::TitleClick)}
                aria-label={view.title_label()}
                data-testid="view-mode-title"
            >
                {title(view, state.anchor_month)}
            </button>
            <div class="nav-group">
                {nav_button(Direction::Next, Stride::Single, "›")}
                {nav_button(Direction::Next, Stride::Double, "»")}
            </div>
        </div>
    }
}

fn render_day_panel(panel: &DayPanel, dispatch: &Callback<PickerEvent>) -> Html {
    html! {
        <div class="day-panel">
            <h4 class="day-panel-title">{&panel.title}</h4>
            <div class="weekday-header">
                {for WEEKDAY_HEADERS.iter().map(|day| html! { <span>{*day}</span> })}
            </div>
            <div class="calendar-days">
                {for panel.cells.iter().map(|cell| {
                    let date = cell.date;
                    let selection = cell.selection;
                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "calendar-day",
                                (!cell.in_displayed_month).then(|| "other-month"),
                                (cell.is_today && selection == DaySelection::None).then(|| "today"),
                                selection.is_endpoint().then(|| "selected"),
                                (selection == DaySelection::SingleDay).then(|| "single-day"),
                                (selection == DaySelection::InRange).then(|| "in-range")
                            )}
                            onclick={dispatch.reform(move |_: MouseEvent| PickerEvent::DayClick(date))}
                            aria-label={date.to_long()}
                        >
                            {date.day()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

fn render_month_panel(
    anchor: CalendarDate,
    value: &DateRangeValue,
    today: CalendarDate,
    dispatch: &Callback<PickerEvent>,
) -> Html {
    html! {
        <div class="month-panel">
            {for month_panel(anchor, value, today).into_iter().map(|cell| {
                let month = cell.month;
                html! {
                    <button
                        type="button"
                        class={classes!(
                            "calendar-month",
                            cell.is_selected.then(|| "selected"),
                            (cell.is_current && !cell.is_selected).then(|| "current")
                        )}
                        onclick={dispatch.reform(move |_: MouseEvent| PickerEvent::MonthClick(month))}
                        aria-label={cell.long_name.clone()}
                    >
                        {cell.short_name}
                    </button>
                }
            })}
        </div>
    }
}

fn render_year_panel(
    anchor: CalendarDate,
    value: &DateRangeValue,
    today: CalendarDate,
    dispatch: &Callback<PickerEvent>,
) -> Html {
    html! {
        <div class="year-panel">
            {for year_panel(anchor, value, today).into_iter().map(|cell| {
                let year = cell.year;
                html! {
                    <button
                        type="button"
                        class={classes!(
                            "calendar-year",
                            cell.outside_decade.then(|| "outside-decade"),
                            cell.is_selected.then(|| "selected"),
                            (cell.is_current && !cell.is_selected).then(|| "current")
                        )}
                        onclick={dispatch.reform(move |_: MouseEvent| PickerEvent::YearClick(year))}
                        aria-label={format!("Select year {}", year)}
                    >
                        {year}
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_root() -> Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        root
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn mousedown_on_document() {
        let mut init = EventInit::new();
        init.bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("mousedown", &init).unwrap();
        document().dispatch_event(&event).unwrap();
    }

    fn panel_is_open(root: &Element) -> bool {
        root.query_selector("[data-testid=date-range-picker-panel]")
            .unwrap()
            .is_some()
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn render_picker(
        root: &Element,
        from_value: &str,
        to_value: &str,
    ) -> (yew::AppHandle<DateRangePicker>, Rc<RefCell<Vec<(String, String)>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let changes = changes.clone();
            Callback::from(move |pair: (String, String)| changes.borrow_mut().push(pair))
        };
        let handle = yew::Renderer::<DateRangePicker>::with_root_and_props(
            root.clone(),
            DateRangePickerProps {
                label: None,
                from_value: from_value.to_string(),
                to_value: to_value.to_string(),
                on_change,
                error: None,
                config: PickerConfig::default(),
            },
        )
        .render();
        (handle, changes)
    }

    #[wasm_bindgen_test]
    async fn test_outside_mousedown_discards_partial_and_detaches() {
        let root = mount_root();
        let (handle, changes) = render_picker(&root, "2024-06-03", "");
        settle().await;

        // Closed picker: the document listener isn't attached yet
        mousedown_on_document();
        settle().await;
        assert!(changes.borrow().is_empty());

        click(&root, "[data-testid=date-range-display]");
        settle().await;
        assert!(panel_is_open(&root));

        mousedown_on_document();
        settle().await;
        assert!(!panel_is_open(&root));
        assert_eq!(*changes.borrow(), vec![(String::new(), String::new())]);

        // Closing released the listener
        mousedown_on_document();
        settle().await;
        assert_eq!(changes.borrow().len(), 1);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_quick_select_closes_and_detaches() {
        let root = mount_root();
        let (handle, changes) = render_picker(&root, "", "");
        settle().await;

        click(&root, "[data-testid=date-range-display]");
        settle().await;
        assert!(panel_is_open(&root));
        let hint = root
            .query_selector("[data-testid=selection-hint]")
            .unwrap()
            .unwrap();
        assert_eq!(hint.text_content().unwrap_or_default(), "Select start date");

        click(&root, &format!("[data-testid={}]", QuickSelect::Today.test_id()));
        settle().await;
        assert!(!panel_is_open(&root));
        let today_iso = today().to_iso();
        assert_eq!(*changes.borrow(), vec![(today_iso.clone(), today_iso)]);

        mousedown_on_document();
        settle().await;
        assert_eq!(changes.borrow().len(), 1);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_unmount_while_open_releases_listener() {
        let root = mount_root();
        let (handle, changes) = render_picker(&root, "2024-06-03", "");
        settle().await;

        click(&root, "[data-testid=date-range-display]");
        settle().await;
        assert!(panel_is_open(&root));

        handle.destroy();
        settle().await;
        mousedown_on_document();
        settle().await;
        assert!(changes.borrow().is_empty());
        root.remove();
    }
}
