//! Schedule date display utilities.
//!
//! Backend dates arrive as ISO 8601 strings, either plain dates or full
//! timestamps. Only the calendar date is shown, so no time zone conversion
//! takes place and a `2024-03-01T23:30:00-03:00` deadline stays on March 1st.

use std::fmt;

use jiff::civil::Date;

/// Default `strftime` pattern for schedule dates.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A wrapper around a raw schedule date that formats its calendar date via
/// the `Display` trait.
///
/// Strings without a leading `YYYY-MM-DD` are shown unchanged, and so is a
/// date whose format pattern cannot be applied.
pub struct ScheduleDate<'a> {
    raw: &'a str,
    format: &'a str,
}

impl<'a> ScheduleDate<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self::with_format(raw, DEFAULT_DATE_FORMAT)
    }

    pub fn with_format(raw: &'a str, format: &'a str) -> Self {
        Self { raw, format }
    }

    /// The calendar date at the start of the raw string, if any.
    pub fn date(&self) -> Option<Date> {
        self.raw.trim().get(..10)?.parse().ok()
    }
}

impl fmt::Display for ScheduleDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .date()
            .and_then(|date| jiff::fmt::strtime::format(self.format, date).ok());
        match formatted {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "{}", self.raw.trim()),
        }
    }
}

/// A start/end pair rendered as `start - end`, `from start` or `until end`.
pub struct DateRange<'a> {
    pub starts_on: Option<&'a str>,
    pub ends_on: Option<&'a str>,
    pub format: &'a str,
}

impl DateRange<'_> {
    pub fn is_empty(&self) -> bool {
        blank(self.starts_on) && blank(self.ends_on)
    }
}

fn blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}

impl fmt::Display for DateRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.starts_on.filter(|s| !s.trim().is_empty());
        let end = self.ends_on.filter(|s| !s.trim().is_empty());
        match (start, end) {
            (Some(start), Some(end)) => write!(
                f,
                "{} - {}",
                ScheduleDate::with_format(start, self.format),
                ScheduleDate::with_format(end, self.format)
            ),
            (Some(start), None) => {
                write!(f, "from {}", ScheduleDate::with_format(start, self.format))
            }
            (None, Some(end)) => write!(f, "until {}", ScheduleDate::with_format(end, self.format)),
            (None, None) => Ok(()),
        }
    }
}
