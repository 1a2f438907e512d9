//! Admin events panel.
//!
//! Owns the in-memory event list and all per-row edit/delete state for
//! the admin view. Every persistence call goes through the [`EventStore`]
//! seam, and every outcome is surfaced as a [`Notice`] the UI can toast.
//! No other component mutates the list.

use log::warn;
use uuid::Uuid;

use crate::access::AdminAccess;
use crate::event::{Event, EventForm};
use crate::store::EventStore;
use crate::validation;

/// Feedback severity, mapped to toast variants by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One piece of non-blocking user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub detail: String,
}

impl Notice {
    fn success(title: &str, detail: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            title: title.to_string(),
            detail: detail.into(),
        }
    }

    fn error(title: &str, detail: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            title: title.to_string(),
            detail: detail.into(),
        }
    }
}

/// Interaction state of one managed row.
///
/// `Viewing -> Editing -> Saving` and `Viewing -> ConfirmingDelete ->
/// Deleting` are the only paths; a failed save falls back to `Editing`
/// with the form intact, a failed delete back to `Viewing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    /// `baseline` is the snapshot taken on edit entry; cancel restores it.
    Editing { form: EventForm, baseline: EventForm },
    Saving { form: EventForm, baseline: EventForm },
    ConfirmingDelete,
    Deleting,
}

/// An event plus its interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub event: Event,
    pub state: RowState,
}

/// State of the list view as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    /// The fetch failed; the list renders empty, never stale.
    Failed(String),
}

/// Controller for the admin events view.
///
/// Single-threaded: all methods take `&mut self` and suspend only on
/// store I/O. `close` marks the view unmounted, after which no action
/// applies results to panel state.
pub struct AdminPanel<S> {
    store: S,
    access: AdminAccess,
    phase: ListPhase,
    rows: Vec<Row>,
    create_form: EventForm,
    creating: bool,
    notices: Vec<Notice>,
    closed: bool,
}

impl<S: EventStore> AdminPanel<S> {
    pub fn new(store: S) -> Self {
        AdminPanel {
            store,
            access: AdminAccess::Unknown,
            phase: ListPhase::Loading,
            rows: Vec::new(),
            create_form: EventForm::default(),
            creating: false,
            notices: Vec::new(),
            closed: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn access(&self) -> AdminAccess {
        self.access
    }

    /// Thread the resolved capability in; re-run on session changes.
    pub fn set_access(&mut self, access: AdminAccess) {
        self.access = access;
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn event_ids(&self) -> Vec<Uuid> {
        self.rows.iter().map(|row| row.event.id).collect()
    }

    pub fn create_form(&self) -> &EventForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut EventForm {
        &mut self.create_form
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// Drain accumulated feedback, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Mark the view unmounted. In-flight results are discarded instead
    /// of being applied to state nobody renders anymore.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Fetch the admin-visible list. On failure the list renders empty
    /// with an error state, never a stale or fabricated one.
    pub async fn load(&mut self) {
        if self.closed {
            return;
        }
        self.phase = ListPhase::Loading;

        let result = self.store.list_all().await;
        if self.closed {
            return;
        }

        match result {
            Ok(events) => {
                self.rows = events
                    .into_iter()
                    .map(|event| Row {
                        event,
                        state: RowState::Viewing,
                    })
                    .collect();
                self.phase = ListPhase::Ready;
            }
            Err(err) => {
                warn!("failed to load events: {err}");
                self.rows.clear();
                self.phase = ListPhase::Failed(err.to_string());
                self.notices
                    .push(Notice::error("Error", format!("Failed to load events: {err}")));
            }
        }
    }

    /// Enter edit mode on a row, snapshotting its current values as the
    /// cancel baseline.
    pub fn begin_edit(&mut self, id: Uuid) {
        if self.closed {
            return;
        }
        let Some(row) = self.row_mut(id) else { return };
        if row.state == RowState::Viewing {
            let snapshot = EventForm::from(&row.event);
            row.state = RowState::Editing {
                form: snapshot.clone(),
                baseline: snapshot,
            };
        }
    }

    /// The editable form of a row, while it is in `Editing`.
    pub fn edit_form_mut(&mut self, id: Uuid) -> Option<&mut EventForm> {
        match &mut self.row_mut(id)?.state {
            RowState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Discard unsaved edits and return to `Viewing`. The row keeps
    /// exactly the values snapshotted on edit entry.
    pub fn cancel_edit(&mut self, id: Uuid) {
        if self.closed {
            return;
        }
        let Some(row) = self.row_mut(id) else { return };
        if matches!(row.state, RowState::Editing { .. }) {
            row.state = RowState::Viewing;
        }
    }

    /// Validate and persist the row's edited fields.
    ///
    /// Validation failure keeps the row in `Editing` without touching
    /// the store; a store failure keeps the edits so nothing is lost.
    pub async fn save(&mut self, id: Uuid) {
        if self.closed || !self.guard_admin() {
            return;
        }

        // Only an Editing row can save; Saving rejects re-entry.
        let (form, baseline) = match self.row(id).map(|row| &row.state) {
            Some(RowState::Editing { form, baseline }) => (form.clone(), baseline.clone()),
            _ => return,
        };

        let draft = match validation::validate(&form) {
            Ok(draft) => draft,
            Err(errors) => {
                for message in errors.messages() {
                    self.notices
                        .push(Notice::error("Invalid event details", message.clone()));
                }
                return;
            }
        };

        self.set_row_state(
            id,
            RowState::Saving {
                form: form.clone(),
                baseline: baseline.clone(),
            },
        );

        let result = self.store.update(id, &draft).await;
        if self.closed {
            return;
        }

        match result {
            Ok(updated) => {
                if let Some(row) = self.row_mut(id) {
                    row.event = updated;
                    row.state = RowState::Viewing;
                }
                self.notices
                    .push(Notice::success("Event updated", "Changes saved successfully."));
            }
            Err(err) if err.is_not_found() => {
                // The row vanished under us; drop it rather than retry.
                self.remove_row(id);
                self.notices
                    .push(Notice::error("Error", "This event no longer exists."));
            }
            Err(err) => {
                warn!("failed to update event {id}: {err}");
                self.set_row_state(id, RowState::Editing { form, baseline });
                self.notices
                    .push(Notice::error("Error", format!("Failed to update event: {err}")));
            }
        }
    }

    /// Ask for confirmation before a delete.
    pub fn request_delete(&mut self, id: Uuid) {
        if self.closed {
            return;
        }
        let Some(row) = self.row_mut(id) else { return };
        if row.state == RowState::Viewing {
            row.state = RowState::ConfirmingDelete;
        }
    }

    /// Back out of a pending delete confirmation.
    pub fn cancel_delete(&mut self, id: Uuid) {
        if self.closed {
            return;
        }
        let Some(row) = self.row_mut(id) else { return };
        if row.state == RowState::ConfirmingDelete {
            row.state = RowState::Viewing;
        }
    }

    /// Permanently delete a row the user has confirmed.
    ///
    /// Only a `ConfirmingDelete` row can proceed, so a delete is never
    /// issued without the confirmation step, and `Deleting` rejects
    /// re-entry. On failure the list is left unchanged.
    pub async fn confirm_delete(&mut self, id: Uuid) {
        if self.closed || !self.guard_admin() {
            return;
        }

        let title = match self.row(id) {
            Some(row) if row.state == RowState::ConfirmingDelete => row.event.title.clone(),
            _ => return,
        };

        self.set_row_state(id, RowState::Deleting);

        let result = self.store.delete(id).await;
        if self.closed {
            return;
        }

        match result {
            Ok(()) => {
                self.remove_row(id);
                self.notices.push(Notice::success(
                    "Event deleted",
                    format!("\"{title}\" has been removed."),
                ));
            }
            Err(err) if err.is_not_found() => {
                // Already gone on the store side; drop the stale row.
                self.remove_row(id);
                self.notices
                    .push(Notice::error("Error", "This event no longer exists."));
            }
            Err(err) => {
                warn!("failed to delete event {id}: {err}");
                self.set_row_state(id, RowState::Viewing);
                self.notices
                    .push(Notice::error("Error", format!("Failed to delete event: {err}")));
            }
        }
    }

    /// Validate and persist the create form as a new event.
    ///
    /// On success the new row is inserted at the top (newest first) and
    /// the form is cleared; on failure the form is left intact.
    pub async fn submit_new(&mut self) {
        if self.closed || !self.guard_admin() {
            return;
        }
        if self.creating {
            return;
        }

        let draft = match validation::validate(&self.create_form) {
            Ok(draft) => draft,
            Err(errors) => {
                for message in errors.messages() {
                    self.notices
                        .push(Notice::error("Invalid event details", message.clone()));
                }
                return;
            }
        };

        self.creating = true;
        let result = self.store.create(&draft).await;
        self.creating = false;
        if self.closed {
            return;
        }

        match result {
            Ok(event) => {
                self.rows.insert(
                    0,
                    Row {
                        event,
                        state: RowState::Viewing,
                    },
                );
                self.create_form = EventForm::default();
                self.notices.push(Notice::success(
                    "Event added",
                    "The event is now live on the events page.",
                ));
            }
            Err(err) => {
                warn!("failed to create event: {err}");
                self.notices
                    .push(Notice::error("Error", format!("Failed to add event: {err}")));
            }
        }
    }

    /// Client-side mutation gate. The store enforces the same rule on
    /// its side regardless of what this returns.
    fn guard_admin(&mut self) -> bool {
        match self.access {
            AdminAccess::Admin => true,
            AdminAccess::Unknown => {
                self.notices.push(Notice::error(
                    "Please wait",
                    "Your access is still being verified.",
                ));
                false
            }
            AdminAccess::NotAdmin => {
                self.notices.push(Notice::error(
                    "Not authorized",
                    "You do not have permission to manage events.",
                ));
                false
            }
        }
    }

    fn row(&self, id: Uuid) -> Option<&Row> {
        self.rows.iter().find(|row| row.event.id == id)
    }

    fn row_mut(&mut self, id: Uuid) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.event.id == id)
    }

    fn set_row_state(&mut self, id: Uuid, state: RowState) {
        if let Some(row) = self.row_mut(id) {
            row.state = state;
        }
    }

    fn remove_row(&mut self, id: Uuid) {
        self.rows.retain(|row| row.event.id != id);
    }
}
