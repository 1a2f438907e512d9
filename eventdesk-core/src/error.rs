//! Error types for the eventdesk ecosystem.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationErrors;

/// Errors that can occur in event store operations.
///
/// Backend crates normalize every transport failure into one of these
/// variants; a raw HTTP client error never crosses the store boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Field validation failed before any network call was made.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A read from the store failed. Callers show an empty list and
    /// report the failure, never "no events exist".
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A write was rejected by the store or never reached it.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The referenced event no longer exists.
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    /// The store rejected a mutation for lack of rights, independently
    /// of the client-side admin check.
    #[error("Not authorized: {0}")]
    Authorization(String),

    /// The backend crate's own settings are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True for the stale-row case the UI handles by dropping the row
    /// instead of retrying.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type alias for event store operations.
pub type StoreResult<T> = Result<T, StoreError>;
