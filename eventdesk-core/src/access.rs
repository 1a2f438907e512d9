//! Admin capability resolution.
//!
//! The identity provider itself (sign-in, sessions, password reset) is
//! external; this module only turns its signals into a capability value
//! the rest of the crate can branch on.

use async_trait::async_trait;
use log::warn;
use uuid::Uuid;

use crate::error::StoreResult;

/// Whether the current session may mutate events.
///
/// `Unknown` means the role lookup has not resolved yet. Callers must
/// treat it as its own state: rendering a denial (or redirecting) on
/// `Unknown` would kick out admins whose lookup is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminAccess {
    #[default]
    Unknown,
    Admin,
    NotAdmin,
}

impl AdminAccess {
    pub fn is_admin(self) -> bool {
        matches!(self, AdminAccess::Admin)
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, AdminAccess::Unknown)
    }
}

/// Source of the admin role signal.
///
/// Backend crates implement this against their role storage; the lookup
/// must not have side effects.
#[async_trait]
pub trait RoleSource {
    /// Whether the identified user holds the admin role.
    async fn is_admin(&self, user_id: Uuid) -> StoreResult<bool>;
}

/// Resolve the capability for the current session.
///
/// `session` is the authenticated user id, if any. Re-run whenever the
/// identity session changes. Fails closed: an anonymous session or a
/// failed lookup resolves to `NotAdmin`, never to an error.
pub async fn resolve<R: RoleSource + ?Sized>(source: &R, session: Option<Uuid>) -> AdminAccess {
    let Some(user_id) = session else {
        return AdminAccess::NotAdmin;
    };

    match source.is_admin(user_id).await {
        Ok(true) => AdminAccess::Admin,
        Ok(false) => AdminAccess::NotAdmin,
        Err(err) => {
            warn!("role lookup for {user_id} failed, treating session as non-admin: {err}");
            AdminAccess::NotAdmin
        }
    }
}
