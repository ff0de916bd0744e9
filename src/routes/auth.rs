//! Auth routes — username/password login, current user, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use tracing::{info, warn};

use crate::services::session::SessionUser;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "delta_session";

fn session_cookie(token: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated member extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    username: String,
    password: String,
}

/// `POST /api/auth/login` — verify credentials, set the session cookie, return the member.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    if body.username.is_empty() || body.password.is_empty() {
        return (StatusCode::BAD_REQUEST, "username and password are required").into_response();
    }

    let Some(user) = state.accounts.verify(&body.username, &body.password) else {
        warn!(username = %body.username, "login rejected");
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let token = state.sessions.create(user.clone()).await;
    let max_age = Duration::seconds(i64::try_from(state.sessions.ttl().as_secs()).unwrap_or(i64::MAX));
    let jar = CookieJar::new().add(session_cookie(token, state.cookie_secure, max_age));

    info!(username = %user.username, "login accepted");
    (jar, Json(user)).into_response()
}

/// `GET /api/auth/me` — return the current member.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.sessions.delete(&auth.token).await;
    info!(username = %auth.user.username, "logged out");

    let jar = CookieJar::new().add(session_cookie(String::new(), state.cookie_secure, Duration::ZERO));
    (jar, StatusCode::NO_CONTENT)
}
