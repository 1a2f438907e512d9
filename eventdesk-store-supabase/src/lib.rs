//! Supabase/PostgREST backend for eventdesk.
//!
//! Implements the `EventStore` and `RoleSource` seams from
//! `eventdesk-core` against a hosted Supabase project:
//! - the `events` table for admin CRUD
//! - the `get_public_events` function for the anonymous read path
//! - the `has_role` function for the admin gate
//!
//! Row-level security on the project enforces admin rights server-side,
//! independently of any client-side check.

pub mod client;
pub mod config;
pub mod role;
pub mod rows;

pub use client::SupabaseStore;
pub use config::StoreConfig;
