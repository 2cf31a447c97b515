//! The host-owned `(from, to)` value and its string contract.

use serde::{Deserialize, Serialize};

use crate::calendar::{display_or_placeholder, CalendarDate};
use crate::error::DateResult;

/// A possibly incomplete date range.
///
/// The picker never mutates one of these in place: it emits a replacement and
/// the host decides what to store. Every range the picker emits keeps
/// `from <= to` when both sides are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeValue {
    #[serde(with = "iso_or_empty")]
    pub from: Option<CalendarDate>,
    #[serde(with = "iso_or_empty")]
    pub to: Option<CalendarDate>,
}

impl DateRangeValue {
    pub fn new(from: Option<CalendarDate>, to: Option<CalendarDate>) -> Self {
        Self { from, to }
    }

    /// Both sides empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only the start has been picked
    pub fn start_only(from: CalendarDate) -> Self {
        Self { from: Some(from), to: None }
    }

    pub fn between(from: CalendarDate, to: CalendarDate) -> Self {
        Self { from: Some(from), to: Some(to) }
    }

    pub fn single_day(day: CalendarDate) -> Self {
        Self::between(day, day)
    }

    /// Read the host's string pair. Empty or unparseable sides become `None`.
    pub fn from_iso_pair(from: &str, to: &str) -> Self {
        Self {
            from: parse_side("from", from),
            to: parse_side("to", to),
        }
    }

    /// Strict variant of [`from_iso_pair`](Self::from_iso_pair): empty sides are
    /// still `None`, but malformed ones are an error
    pub fn try_from_iso_pair(from: &str, to: &str) -> DateResult<Self> {
        let parse = |value: &str| -> DateResult<Option<CalendarDate>> {
            if value.trim().is_empty() {
                Ok(None)
            } else {
                CalendarDate::parse_iso(value).map(Some)
            }
        };
        Ok(Self {
            from: parse(from)?,
            to: parse(to)?,
        })
    }

    /// Write back to the host's string pair, `""` for empty sides
    pub fn to_iso_pair(&self) -> (String, String) {
        (iso_or_blank(self.from), iso_or_blank(self.to))
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// A start without an end: the state an abandoned selection leaves behind
    pub fn is_partial(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Inclusive containment; false unless both sides are set
    pub fn contains(&self, day: CalendarDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            _ => false,
        }
    }

    /// `dd/mm/yyyy → dd/mm/yyyy`, placeholders for empty sides
    pub fn display(&self) -> String {
        format!(
            "{} → {}",
            display_or_placeholder(self.from),
            display_or_placeholder(self.to)
        )
    }
}

fn parse_side(side: &str, value: &str) -> Option<CalendarDate> {
    if value.trim().is_empty() {
        return None;
    }
    match CalendarDate::parse_iso(value) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(side, error = %e, "treating unparseable range value as empty");
            None
        }
    }
}

fn iso_or_blank(date: Option<CalendarDate>) -> String {
    date.map(|d| d.to_iso()).unwrap_or_default()
}

/// Host-side validation of a submitted range.
///
/// The picker itself never validates; the host runs this on submit and hands
/// the message back through the picker's `error` prop.
pub fn validate_range(value: &DateRangeValue) -> Result<(), &'static str> {
    match (value.from, value.to) {
        (Some(_), None) => Err("To Date is required if From Date is provided."),
        (None, Some(_)) => Err("From Date is required if To Date is provided."),
        _ => Ok(()),
    }
}

/// Serde adapter mapping `None` to `""` and back, so JSON matches the host's
/// string contract
mod iso_or_empty {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::calendar::CalendarDate;

    pub fn serialize<S>(date: &Option<CalendarDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.to_iso()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CalendarDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        CalendarDate::parse_iso(&raw).map(Some).map_err(D::Error::custom)
    }
}
