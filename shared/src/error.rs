use thiserror::Error;

/// Errors raised while turning host input into calendar dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The string is not a `YYYY-MM-DD` calendar date
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidFormat(String),
    /// Month number outside 1..=12
    #[error("invalid month {0}: expected 1-12")]
    InvalidMonth(u32),
    /// Year/month/day combination that does not exist on the calendar
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

pub type DateResult<T> = Result<T, DateError>;
