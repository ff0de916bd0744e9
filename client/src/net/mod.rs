//! Networking modules for the portal's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON schema shared
//! with the server.

pub mod api;
pub mod types;
