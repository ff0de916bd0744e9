use axum::extract::FromRequestParts;
use axum::http::{Request, header};

use super::*;
use crate::config::PortalConfig;
use crate::services::accounts::{AccountStore, hash_password};

// =============================================================================
// Helpers
// =============================================================================

fn test_state() -> AppState {
    let yaml = format!(
        "accounts:\n  - username: alice\n    name: Alice\n    password_sha256: {}\n",
        hash_password("s3cret")
    );
    let accounts = AccountStore::from_yaml(&yaml).unwrap();
    AppState::new(accounts, &PortalConfig::default())
}

fn body(username: &str, password: &str) -> Json<LoginBody> {
    Json(LoginBody { username: username.to_owned(), password: password.to_owned() })
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn token_from(set_cookie: &str) -> String {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.strip_prefix(&format!("{COOKIE_NAME}=")).unwrap_or_default().to_owned()
}

async fn extract(state: &AppState, cookie: Option<&str>) -> Result<AuthUser, StatusCode> {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_accepts_valid_credentials_and_sets_cookie() {
    let state = test_state();
    let resp = login(State(state.clone()), body("alice", "s3cret")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("delta_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert_eq!(state.sessions.len().await, 1);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "alice", "name": "Alice" }));
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let state = test_state();
    let resp = login(State(state.clone()), body("alice", "wrong")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&resp).is_empty());
    assert_eq!(state.sessions.len().await, 0);
}

#[tokio::test]
async fn login_has_no_lockout_after_failures() {
    let state = test_state();
    for _ in 0..10 {
        let resp = login(State(state.clone()), body("alice", "wrong")).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
    let resp = login(State(state), body("alice", "s3cret")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let state = test_state();
    let resp = login(State(state.clone()), body("", "s3cret")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let resp = login(State(state), body("alice", "")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// AuthUser extractor / me / logout
// =============================================================================

#[tokio::test]
async fn extractor_rejects_missing_cookie() {
    let state = test_state();
    assert!(matches!(extract(&state, None).await, Err(StatusCode::UNAUTHORIZED)));
}

#[tokio::test]
async fn extractor_rejects_unknown_token() {
    let state = test_state();
    let result = extract(&state, Some("delta_session=deadbeef")).await;
    assert!(matches!(result, Err(StatusCode::UNAUTHORIZED)));
}

#[tokio::test]
async fn me_returns_logged_in_member() {
    let state = test_state();
    let resp = login(State(state.clone()), body("alice", "s3cret")).await;
    let token = token_from(&set_cookie(&resp));

    let auth = extract(&state, Some(&format!("{COOKIE_NAME}={token}"))).await.unwrap();
    let Json(user) = me(auth).await;
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn logout_deletes_session_and_expires_cookie() {
    let state = test_state();
    let resp = login(State(state.clone()), body("alice", "s3cret")).await;
    let cookie = format!("{COOKIE_NAME}={}", token_from(&set_cookie(&resp)));

    let auth = extract(&state, Some(&cookie)).await.unwrap();
    let resp = logout(State(state.clone()), auth).await.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie(&resp).contains("Max-Age=0"));

    assert!(matches!(extract(&state, Some(&cookie)).await, Err(StatusCode::UNAUTHORIZED)));
}
