//! Store seam for event persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft, EventForm};
use crate::validation;

/// Durable CRUD over the hosted `events` table.
///
/// The only seam through which persistence happens. Implementations
/// normalize transport failures into `StoreError`; every call can fail
/// independently of prior calls. All listings come back ordered by
/// `created_at` descending.
#[async_trait]
pub trait EventStore {
    /// All events via the read path that needs no admin rights (the
    /// public projection of the table).
    async fn list_public(&self) -> StoreResult<Vec<Event>>;

    /// All events with every field, for the admin view.
    async fn list_all(&self) -> StoreResult<Vec<Event>>;

    /// Insert a new event and return it with the store-assigned `id`
    /// and `created_at`.
    async fn create(&self, draft: &EventDraft) -> StoreResult<Event>;

    /// Replace all mutable fields of the identified event and return
    /// the updated record. `NotFound` if the id does not exist.
    async fn update(&self, id: Uuid, draft: &EventDraft) -> StoreResult<Event>;

    /// Permanently remove the identified event. Deleting an id that
    /// does not exist is `NotFound`, never a silent success.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// Validate raw form input and insert it in one step. Invalid input
    /// fails with `StoreError::Validation` before any network call.
    async fn create_from_form(&self, form: &EventForm) -> StoreResult<Event> {
        let draft = validation::validate(form).map_err(StoreError::Validation)?;
        self.create(&draft).await
    }

    /// Validate raw form input and replace the identified event's
    /// fields in one step.
    async fn update_from_form(&self, id: Uuid, form: &EventForm) -> StoreResult<Event> {
        let draft = validation::validate(form).map_err(StoreError::Validation)?;
        self.update(id, &draft).await
    }
}
