//! Sibling ordering shared by phases and tasks.
//!
//! Siblings sort by start date (undated last), then manual position, then
//! name. Names compare case- and accent-insensitively first, the way a
//! Portuguese-locale string comparison would, and fall back to the raw string
//! so the order stays total.

use std::cmp::Ordering;

use jiff::{civil, tz::TimeZone, Timestamp};

use crate::models::{Phase, Task};

/// Start of a schedule entry; undated entries sort after every dated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StartKey {
    Dated(Timestamp),
    Undated,
}

impl StartKey {
    pub fn from_raw(raw: Option<&str>) -> Self {
        raw.and_then(parse_schedule_date)
            .map_or(StartKey::Undated, StartKey::Dated)
    }
}

/// Fields that drive sibling ordering.
pub trait Scheduled {
    fn starts_on(&self) -> Option<&str>;
    fn position(&self) -> i64;
    fn name(&self) -> &str;
}

impl Scheduled for Phase {
    fn starts_on(&self) -> Option<&str> {
        self.starts_on.as_deref()
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Scheduled for Task {
    fn starts_on(&self) -> Option<&str> {
        self.starts_on.as_deref()
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Precomputed sort key for one sibling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduleKey {
    start: StartKey,
    position: i64,
    folded_name: String,
    name: String,
}

impl ScheduleKey {
    pub fn of<S: Scheduled + ?Sized>(item: &S) -> Self {
        Self {
            start: StartKey::from_raw(item.starts_on()),
            position: item.position(),
            folded_name: fold_name(item.name()),
            name: item.name().to_string(),
        }
    }
}

/// Compares two siblings by start date, position and name.
pub fn schedule_order<S: Scheduled + ?Sized>(a: &S, b: &S) -> Ordering {
    ScheduleKey::of(a).cmp(&ScheduleKey::of(b))
}

/// Sorts slots in place by the schedule key of the item each slot maps to.
/// The sort is stable, so full ties keep input order.
pub(crate) fn sort_slots<'a, S, F>(slots: &mut [usize], item: F)
where
    S: Scheduled + ?Sized + 'a,
    F: Fn(usize) -> &'a S,
{
    slots.sort_by_cached_key(|&slot| ScheduleKey::of(item(slot)));
}

/// Parses a schedule date.
///
/// Accepts RFC 3339 timestamps, civil date-times (read as UTC) and plain
/// `YYYY-MM-DD` dates (UTC midnight). Returns `None` for anything else.
///
/// # Examples
///
/// ```rust
/// use planwise_core::planning::parse_schedule_date;
///
/// let date = parse_schedule_date("2024-03-01").unwrap();
/// let stamp = parse_schedule_date("2024-03-01T00:00:00Z").unwrap();
/// assert_eq!(date, stamp);
/// assert!(parse_schedule_date("next week").is_none());
/// ```
pub fn parse_schedule_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp);
    }
    if let Ok(datetime) = raw.parse::<civil::DateTime>() {
        return datetime.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }
    raw.parse::<civil::Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|z| z.timestamp())
}

/// Case- and accent-folded form of a name for primary comparison.
pub fn fold_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
