//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and the login page talks to the server through one `AuthService` seam.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, AuthError};
use crate::state::auth::AuthState;

/// Credential verification consumed by the login page.
pub trait AuthService {
    /// Resolve `true` when the credentials opened a session, `false` when
    /// the server rejected them.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the service could not be reached or
    /// answered unexpectedly.
    fn login(&self, username: &str, password: &str) -> impl Future<Output = Result<bool, AuthError>>;
}

/// `AuthService` backed by `/api/auth/login` that records the signed-in user
/// in the app-wide auth state.
#[derive(Clone, Copy, Debug)]
pub struct SessionAuthService {
    auth: RwSignal<AuthState>,
}

impl SessionAuthService {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { auth }
    }
}

impl AuthService for SessionAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        match api::login(username, password).await? {
            Some(user) => {
                self.auth.update(|state| state.resolve(Some(user)));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Whether a guarded route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
