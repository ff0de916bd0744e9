//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and session bookkeeping so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod accounts;
pub mod session;
