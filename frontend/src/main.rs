use serde::Serialize;
use shared::{validate_range, DateRangeValue, PickerConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::date_range_picker::DateRangePicker;
use services::logging::Logger;

/// What the demo form "submits": shown back to the user as JSON
#[derive(Debug, Serialize)]
struct FormSubmission {
    date_range: DateRangeValue,
    submitted_at: String,
}

#[function_component(App)]
fn app() -> Html {
    // The page owns the committed range; the picker only reports changes
    let date_from = use_state(String::new);
    let date_to = use_state(String::new);
    let range_error = use_state(|| Option::<String>::None);
    let submission = use_state(|| Option::<String>::None);

    let picker_config = if cfg!(debug_assertions) {
        PickerConfig::debug()
    } else {
        PickerConfig::default()
    };

    let on_range_change = {
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let range_error = range_error.clone();
        Callback::from(move |(from, to): (String, String)| {
            date_from.set(from);
            date_to.set(to);
            range_error.set(None); // Clear error when dates are changed
        })
    };

    let on_submit = {
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let range_error = range_error.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let date_range = DateRangeValue::from_iso_pair(&date_from, &date_to);
            if let Err(message) = validate_range(&date_range) {
                range_error.set(Some(message.to_string()));
                submission.set(None);
                return;
            }

            let payload = FormSubmission {
                date_range,
                submitted_at: js_sys::Date::new_0().to_iso_string().into(),
            };
            match serde_json::to_string_pretty(&payload) {
                Ok(json) => {
                    Logger::info_with_component("forms-page", "Form submitted");
                    submission.set(Some(json));
                }
                Err(e) => {
                    Logger::error_with_component("forms-page", &format!("Failed to serialize submission: {}", e));
                    submission.set(None);
                }
            }
        })
    };

    let on_reset = {
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let range_error = range_error.clone();
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| {
            date_from.set(String::new());
            date_to.set(String::new());
            range_error.set(None);
            submission.set(None);
        })
    };

    html! {
        <main class="forms-test-page">
            <h2>{"Forms"}</h2>
            <form class="test-form" onsubmit={on_submit} novalidate={true}>
                <h3>{"Date & Time Pickers"}</h3>
                <DateRangePicker
                    label="Date Range (From - To)"
                    from_value={(*date_from).clone()}
                    to_value={(*date_to).clone()}
                    on_change={on_range_change}
                    error={(*range_error).clone()}
                    config={picker_config}
                />

                <div class="form-actions">
                    <button type="submit" class="submit-button">{"Submit"}</button>
                    <button type="button" class="reset-button" onclick={on_reset}>{"Reset"}</button>
                </div>
            </form>

            {if let Some(json) = &*submission {
                html! {
                    <div class="submission-result" role="status">
                        <h4>{"Submitted"}</h4>
                        <pre>{json}</pre>
                    </div>
                }
            } else { html! {} }}
        </main>
    }
}

fn main() {
    services::logging::init_tracing(cfg!(debug_assertions));
    yew::Renderer::<App>::new().render();
}
