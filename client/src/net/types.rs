//! Wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field-for-field so serde
//! round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated portal member as returned by `/api/auth/me` and
/// `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, unique across the account store.
    pub username: String,
    /// Display name shown in the dashboard header.
    pub name: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
