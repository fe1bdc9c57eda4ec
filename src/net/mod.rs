//! Networking modules for the external triage backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` defines the failure taxonomy surfaced
//! to pages, and `types` defines the validated wire schema.

pub mod api;
pub mod error;
pub mod types;
