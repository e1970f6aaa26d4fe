//! Networking modules for the contact submission endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the JSON schema shared with
//! the server's `/api/contact` route.

pub mod api;
pub mod types;
