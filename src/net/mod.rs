//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the wire schema they
//! decode into.

pub mod api;
pub mod types;
