//! Upcoming/past partitioning for the public events page.
//!
//! Events carry free-text date/time labels, not structured timestamps,
//! so classification parses them best-effort. Malformed input must never
//! escape this module as a panic or error: anything unparseable counts
//! as upcoming.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::event::Event;

/// Pattern for `"<date label> <start time>"`, e.g. "March 15, 2026 2:00 PM".
const SCHEDULE_FORMAT: &str = "%B %d, %Y %I:%M %p";

/// A list of events partitioned around an instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

/// Partition `events` into upcoming and past relative to `now`.
///
/// Pure in `(events, now)`. Callers re-run this on every render; the
/// result must not be cached since "now" advances. Relative order within
/// each bucket is preserved.
///
/// An event is past iff its parsed start is strictly before `now`.
/// Events with a missing or unparseable date/time are upcoming.
pub fn classify(events: Vec<Event>, now: DateTime<Utc>) -> Schedule {
    let mut schedule = Schedule::default();

    for event in events {
        match start_instant(&event) {
            Some(start) if start < now => schedule.past.push(event),
            _ => schedule.upcoming.push(event),
        }
    }

    schedule
}

/// The instant an event starts, if its labels parse.
///
/// The time label is a range like "2:00 PM - 5:00 PM"; only the part
/// before the first `-` is the start. Labels carry no timezone and are
/// read as UTC.
pub fn start_instant(event: &Event) -> Option<DateTime<Utc>> {
    let date = event.event_date.as_deref()?.trim();
    let start = event.event_time.as_deref()?.split('-').next()?.trim();

    if date.is_empty() || start.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(&format!("{date} {start}"), SCHEDULE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
