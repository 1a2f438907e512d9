//! PostgREST client for the hosted `events` table.
//!
//! The only place the crate talks HTTP. Transport and status failures
//! are normalized into `StoreError` at this boundary; callers never see
//! a raw reqwest error.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, Response, StatusCode};
use uuid::Uuid;

use eventdesk_core::error::{StoreError, StoreResult};
use eventdesk_core::event::{Event, EventDraft};
use eventdesk_core::store::EventStore;

use crate::config::StoreConfig;
use crate::rows::EventRow;

/// Listings come back newest first.
const ORDER: &str = "created_at.desc";

/// Client for one Supabase project.
pub struct SupabaseStore {
    http: reqwest::Client,
    config: StoreConfig,
    /// Access token of the signed-in admin; the anon key is used when
    /// absent. Row-level security decides what either may touch.
    access_token: Option<String>,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        SupabaseStore {
            http: reqwest::Client::new(),
            config,
            access_token: None,
        }
    }

    /// Use the signed-in user's token for subsequent calls.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub(crate) fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/events",
            self.config.project_url.trim_end_matches('/')
        )
    }

    pub(crate) fn rpc_url(&self, function: &str) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.config.project_url.trim_end_matches('/'),
            function
        )
    }

    pub(crate) fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.config.anon_key)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(self.bearer())
    }
}

/// Whether a failed call was reading or writing, for error kind mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Read,
    Write,
}

pub(crate) fn transport_error(op: Op, action: &str, err: reqwest::Error) -> StoreError {
    warn!("{action}: transport failure: {err}");
    match op {
        Op::Read => StoreError::Fetch(format!("{action}: {err}")),
        Op::Write => StoreError::Persistence(format!("{action}: {err}")),
    }
}

pub(crate) fn status_error(op: Op, action: &str, status: StatusCode) -> StoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StoreError::Authorization(format!("{action}: store returned {status}"))
        }
        _ => match op {
            Op::Read => StoreError::Fetch(format!("{action}: store returned {status}")),
            Op::Write => StoreError::Persistence(format!("{action}: store returned {status}")),
        },
    }
}

/// Read the failure body for the log, then map the status.
pub(crate) async fn reject(op: Op, action: &str, response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("{action}: store returned {status}: {body}");
    status_error(op, action, status)
}

#[async_trait]
impl EventStore for SupabaseStore {
    async fn list_public(&self) -> StoreResult<Vec<Event>> {
        let action = "list public events";
        let response = self
            .request(Method::POST, &self.rpc_url("get_public_events"))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Read, action, response).await);
        }

        let rows: Vec<EventRow> = response
            .json()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))?;
        debug!("{action}: {} rows", rows.len());
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn list_all(&self) -> StoreResult<Vec<Event>> {
        let action = "list events";
        let response = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*"), ("order", ORDER)])
            .send()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Read, action, response).await);
        }

        let rows: Vec<EventRow> = response
            .json()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))?;
        debug!("{action}: {} rows", rows.len());
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn create(&self, draft: &EventDraft) -> StoreResult<Event> {
        let action = "create event";
        let response = self
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Write, action, response).await);
        }

        let mut rows: Vec<EventRow> = response
            .json()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;
        match rows.pop() {
            Some(row) => Ok(Event::from(row)),
            None => Err(StoreError::Persistence(format!(
                "{action}: store returned no row"
            ))),
        }
    }

    async fn update(&self, id: Uuid, draft: &EventDraft) -> StoreResult<Event> {
        let action = "update event";
        let response = self
            .request(Method::PATCH, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Write, action, response).await);
        }

        // The representation tells us whether the filter matched a row
        let mut rows: Vec<EventRow> = response
            .json()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;
        match rows.pop() {
            Some(row) => Ok(Event::from(row)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let action = "delete event";
        let response = self
            .request(Method::DELETE, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Write, action, response).await);
        }

        let rows: Vec<EventRow> = response
            .json()
            .await
            .map_err(|e| transport_error(Op::Write, action, e))?;
        if rows.is_empty() {
            // Deleting a row that never existed is an error, not a
            // silent success
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
