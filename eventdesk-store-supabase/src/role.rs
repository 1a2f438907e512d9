//! Admin role lookup.
//!
//! Roles live in their own table behind the `has_role` security-definer
//! function, so clients can ask about a role without being able to read
//! the roles table itself.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use uuid::Uuid;

use eventdesk_core::access::RoleSource;
use eventdesk_core::error::StoreResult;

use crate::client::{Op, SupabaseStore, reject, transport_error};

#[async_trait]
impl RoleSource for SupabaseStore {
    async fn is_admin(&self, user_id: Uuid) -> StoreResult<bool> {
        let action = "check admin role";
        let response = self
            .request(Method::POST, &self.rpc_url("has_role"))
            .json(&json!({ "_user_id": user_id, "_role": "admin" }))
            .send()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))?;

        if !response.status().is_success() {
            return Err(reject(Op::Read, action, response).await);
        }

        response
            .json::<bool>()
            .await
            .map_err(|e| transport_error(Op::Read, action, e))
    }
}
