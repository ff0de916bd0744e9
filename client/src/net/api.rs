//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

/// Failure talking to the auth endpoints.
///
/// A rejected credential pair is not an error; `login` reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Transport(String),
    #[error("auth request failed: {0}")]
    Status(u16),
    #[error("malformed auth response: {0}")]
    Decode(String),
    #[error("auth service not available on server")]
    Unavailable,
}

/// How the login endpoint's status code maps to an outcome.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginStatus {
    Accepted,
    Rejected,
    Failed(u16),
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_login_status(status: u16) -> LoginStatus {
    match status {
        200..=299 => LoginStatus::Accepted,
        401 | 403 => LoginStatus::Rejected,
        other => LoginStatus::Failed(other),
    }
}

/// Verify credentials via `POST /api/auth/login`.
///
/// Returns `Ok(Some(user))` when the server opened a session, `Ok(None)`
/// when it rejected the credentials.
///
/// # Errors
///
/// Returns an [`AuthError`] on transport failure, an unexpected status,
/// an undecodable body, or when called outside the browser.
pub async fn login(username: &str, password: &str) -> Result<Option<User>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        match classify_login_status(resp.status()) {
            LoginStatus::Accepted => {
                let user = resp.json::<User>().await.map_err(|e| AuthError::Decode(e.to_string()))?;
                Ok(Some(user))
            }
            LoginStatus::Rejected => Ok(None),
            LoginStatus::Failed(status) => Err(AuthError::Status(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::Unavailable)
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
