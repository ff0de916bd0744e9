//! Submit flow of the login page.
//!
//! One call at a time: the submitting flag is claimed before the service is
//! called and released by a drop guard, so it clears on success, on a
//! rejected login, on a service error, and when the future is dropped.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use leptos::prelude::*;

use crate::net::api::AuthError;
use crate::state::session_entry::{SessionEntryState, SubmitBlocked};
use crate::util::auth::AuthService;

/// Landing route after a successful login.
pub const PROTECTED_DESTINATION: &str = "/dashboard";

/// Storage for the login form state.
pub trait SessionEntryStore {
    /// Mutate the state. `None` when the store is gone (page unmounted).
    fn update_entry<R>(&self, f: impl FnOnce(&mut SessionEntryState) -> R) -> Option<R>;
}

impl SessionEntryStore for RwSignal<SessionEntryState> {
    fn update_entry<R>(&self, f: impl FnOnce(&mut SessionEntryState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Result of a submit attempt that did not fail at the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session opened; navigation to the protected area was issued.
    Authenticated,
    /// Credentials rejected; the form stays filled for a retry.
    InvalidCredentials,
    /// No call was made.
    Blocked(SubmitBlocked),
    /// The form state no longer exists.
    Detached,
}

struct SubmittingGuard<'a, S: SessionEntryStore> {
    store: &'a S,
}

impl<S: SessionEntryStore> Drop for SubmittingGuard<'_, S> {
    fn drop(&mut self) {
        let _ = self.store.update_entry(SessionEntryState::finish_submit);
    }
}

/// Submit the form held in `store` through `auth`.
///
/// `navigate` is invoked once with [`PROTECTED_DESTINATION`] after the service
/// accepts the credentials, and never otherwise.
///
/// # Errors
///
/// Service failures are returned unchanged after the submitting flag has been
/// cleared; surfacing them is left to the caller.
pub async fn submit_credentials<S, A, N>(store: &S, auth: &A, navigate: N) -> Result<SubmitOutcome, AuthError>
where
    S: SessionEntryStore,
    A: AuthService,
    N: FnOnce(&str),
{
    let credentials = match store.update_entry(SessionEntryState::begin_submit) {
        None => return Ok(SubmitOutcome::Detached),
        Some(Err(blocked)) => return Ok(SubmitOutcome::Blocked(blocked)),
        Some(Ok(credentials)) => credentials,
    };
    let _submitting = SubmittingGuard { store };

    if auth.login(&credentials.username, &credentials.password).await? {
        navigate(PROTECTED_DESTINATION);
        Ok(SubmitOutcome::Authenticated)
    } else {
        Ok(SubmitOutcome::InvalidCredentials)
    }
}
