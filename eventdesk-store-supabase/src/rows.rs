//! Wire types for the `events` table.
//!
//! Keeps the PostgREST row shape separate from the core `Event` so the
//! column layout can drift without touching callers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use eventdesk_core::event::Event;

/// One row of the `events` table, or of the public projection returned
/// by `get_public_events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    pub ticketing_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            event_time: row.event_time,
            location: row.location,
            capacity: row.capacity,
            ticketing_id: row.ticketing_id,
            created_at: row.created_at,
        }
    }
}
