//! Store-neutral event types.
//!
//! These types represent site events independently of the backing store.
//! Backend crates convert their row formats into these types, and the
//! admin panel and public events page work exclusively with them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published event, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier; never sent on create.
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Free-text date label, e.g. "March 15, 2026".
    pub event_date: Option<String>,
    /// Free-text time range label, e.g. "2:00 PM - 5:00 PM".
    pub event_time: Option<String>,
    pub location: Option<String>,
    /// Free-text capacity label, e.g. "20 spots available".
    pub capacity: Option<String>,
    /// Numeric id of the event in the external ticketing system. The
    /// checkout widget joins on this, so it must stay non-empty and
    /// digits-only for the lifetime of the event.
    pub ticketing_id: String,
    /// Store-assigned creation timestamp; default sort key (newest first).
    pub created_at: DateTime<Utc>,
}

/// Raw, unvalidated input from the admin form.
///
/// Every field is a plain string exactly as typed. `validation::validate`
/// turns this into an [`EventDraft`] or a list of error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub capacity: String,
    pub ticketing_id: String,
}

impl From<&Event> for EventForm {
    /// Seed an edit form from an existing event. Absent optional fields
    /// become empty strings for display.
    fn from(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            event_date: event.event_date.clone().unwrap_or_default(),
            event_time: event.event_time.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            capacity: event.capacity.clone().unwrap_or_default(),
            ticketing_id: event.ticketing_id.clone(),
        }
    }
}

/// The validated, normalized mutable fields of an event, ready to be
/// written to the store.
///
/// Blank optional fields are `None`, never empty strings. Obtained only
/// through `validation::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<String>,
    pub ticketing_id: String,
}
