use chrono::NaiveDate;
use js_sys::Date;
use shared::CalendarDate;

use super::logging::Logger;

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's calendar day in the browser's local time zone
pub fn today() -> CalendarDate {
    match CalendarDate::parse_iso(&get_current_date()) {
        Ok(date) => date,
        Err(e) => {
            Logger::error_with_component("date-utils", &format!("Browser returned an invalid date: {}", e));
            CalendarDate::from(NaiveDate::default())
        }
    }
}
