//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session_entry`, `theme`) so pages can
//! depend on small focused models.

pub mod auth;
pub mod session_entry;
pub mod theme;
