use std::cell::{Cell, RefCell};
use std::pin::pin;

use futures::channel::oneshot;
use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::state::session_entry::EntryValidationError;
use crate::state::theme::{ThemeController, ThemePreference};
use crate::util::theme_override::install_dark_override;
use crate::util::theme_root::MemoryRoot;

// =============================================================
// Helpers
// =============================================================

impl SessionEntryStore for RefCell<SessionEntryState> {
    fn update_entry<R>(&self, f: impl FnOnce(&mut SessionEntryState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Store whose page has already been torn down.
struct GoneStore;

impl SessionEntryStore for GoneStore {
    fn update_entry<R>(&self, _f: impl FnOnce(&mut SessionEntryState) -> R) -> Option<R> {
        None
    }
}

/// Auth service that answers with a fixed reply, or waits on a gate.
struct ScriptedAuth {
    reply: Result<bool, AuthError>,
    gate: RefCell<Option<oneshot::Receiver<Result<bool, AuthError>>>>,
    calls: Cell<usize>,
    seen: RefCell<Vec<(String, String)>>,
}

impl ScriptedAuth {
    fn replying(reply: Result<bool, AuthError>) -> Self {
        Self { reply, gate: RefCell::new(None), calls: Cell::new(0), seen: RefCell::new(Vec::new()) }
    }

    fn gated() -> (Self, oneshot::Sender<Result<bool, AuthError>>) {
        let (tx, rx) = oneshot::channel();
        let auth = Self::replying(Ok(false));
        *auth.gate.borrow_mut() = Some(rx);
        (auth, tx)
    }
}

impl AuthService for ScriptedAuth {
    async fn login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push((username.to_owned(), password.to_owned()));
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AuthError::Transport("gate dropped".to_owned()))),
            None => self.reply.clone(),
        }
    }
}

fn form(username: &str, password: &str) -> RefCell<SessionEntryState> {
    RefCell::new(SessionEntryState {
        username: username.to_owned(),
        password: password.to_owned(),
        submitting: false,
    })
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn accepted_credentials_navigate_once_to_dashboard() {
    let store = form("alice", "right");
    let auth = ScriptedAuth::replying(Ok(true));
    let navigations = RefCell::new(Vec::new());

    let outcome = block_on(submit_credentials(&store, &auth, |path: &str| {
        navigations.borrow_mut().push(path.to_owned());
    }));

    assert_eq!(outcome, Ok(SubmitOutcome::Authenticated));
    assert_eq!(*navigations.borrow(), vec![PROTECTED_DESTINATION.to_owned()]);
    assert_eq!(*auth.seen.borrow(), vec![("alice".to_owned(), "right".to_owned())]);
    assert!(!store.borrow().submitting);
}

#[test]
fn rejected_credentials_stay_on_form() {
    let store = form("alice", "wrong");
    let auth = ScriptedAuth::replying(Ok(false));
    let navigated = Cell::new(false);

    let outcome = block_on(submit_credentials(&store, &auth, |_: &str| navigated.set(true)));

    assert_eq!(outcome, Ok(SubmitOutcome::InvalidCredentials));
    assert!(!navigated.get());
    let state = store.borrow();
    assert!(!state.submitting);
    assert_eq!(state.username, "alice");
    assert_eq!(state.password, "wrong");
}

#[test]
fn service_failure_clears_flag_and_propagates() {
    let store = form("alice", "pw");
    let auth = ScriptedAuth::replying(Err(AuthError::Status(500)));
    let navigated = Cell::new(false);

    let outcome = block_on(submit_credentials(&store, &auth, |_: &str| navigated.set(true)));

    assert_eq!(outcome, Err(AuthError::Status(500)));
    assert!(!navigated.get());
    assert!(!store.borrow().submitting);
}

#[test]
fn retry_after_rejection_reaches_service_again() {
    let store = form("alice", "wrong");
    let auth = ScriptedAuth::replying(Ok(false));

    block_on(submit_credentials(&store, &auth, |_: &str| {})).unwrap();
    block_on(submit_credentials(&store, &auth, |_: &str| {})).unwrap();

    assert_eq!(auth.calls.get(), 2);
}

#[test]
fn empty_field_never_calls_service() {
    let store = form("alice", "");
    let auth = ScriptedAuth::replying(Ok(true));

    let outcome = block_on(submit_credentials(&store, &auth, |_: &str| {}));

    assert_eq!(
        outcome,
        Ok(SubmitOutcome::Blocked(SubmitBlocked::Invalid(EntryValidationError::MissingPassword)))
    );
    assert_eq!(auth.calls.get(), 0);
    assert!(!store.borrow().submitting);
}

#[test]
fn detached_store_is_a_noop() {
    let auth = ScriptedAuth::replying(Ok(true));
    let outcome = block_on(submit_credentials(&GoneStore, &auth, |_: &str| {}));
    assert_eq!(outcome, Ok(SubmitOutcome::Detached));
    assert_eq!(auth.calls.get(), 0);
}

// =============================================================
// In-flight behavior
// =============================================================

#[test]
fn navigation_waits_for_service_resolution() {
    let store = form("alice", "right");
    let (auth, tx) = ScriptedAuth::gated();
    let navigations = RefCell::new(Vec::new());

    block_on(async {
        let mut first = pin!(submit_credentials(&store, &auth, |path: &str| {
            navigations.borrow_mut().push(path.to_owned());
        }));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(store.borrow().submitting);
        assert!(navigations.borrow().is_empty());

        tx.send(Ok(true)).unwrap();
        assert_eq!(first.await, Ok(SubmitOutcome::Authenticated));
    });

    assert_eq!(navigations.borrow().len(), 1);
    assert!(!store.borrow().submitting);
}

#[test]
fn second_submit_while_in_flight_is_blocked() {
    let store = form("alice", "right");
    let (auth, tx) = ScriptedAuth::gated();

    block_on(async {
        let mut first = pin!(submit_credentials(&store, &auth, |_: &str| {}));
        assert!(futures::poll!(first.as_mut()).is_pending());

        let second = submit_credentials(&store, &auth, |_: &str| {}).await;
        assert_eq!(second, Ok(SubmitOutcome::Blocked(SubmitBlocked::InFlight)));
        assert_eq!(auth.calls.get(), 1);

        tx.send(Ok(false)).unwrap();
        assert_eq!(first.await, Ok(SubmitOutcome::InvalidCredentials));
    });

    assert!(!store.borrow().submitting);
}

#[test]
fn dropping_in_flight_submit_clears_flag() {
    let store = form("alice", "right");
    let (auth, _tx) = ScriptedAuth::gated();

    block_on(async {
        let mut first = Box::pin(submit_credentials(&store, &auth, |_: &str| {}));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(store.borrow().submitting);
        drop(first);
    });

    assert!(!store.borrow().submitting);
}

// =============================================================
// Login page scenario: override + rejected submit + unmount
// =============================================================

#[test]
fn rejected_login_then_leaving_restores_light_root() {
    let root = MemoryRoot::with(&[ThemePreference::Light]);
    let theme = ThemeController::new(ThemePreference::Light);

    let page = Owner::new();
    page.with(|| install_dark_override(theme, root.clone()));
    assert_eq!(root.markers(), vec!["dark"]);

    let store = form("alice", "wrong");
    let auth = ScriptedAuth::replying(Ok(false));
    let navigated = Cell::new(false);
    let outcome = block_on(submit_credentials(&store, &auth, |_: &str| navigated.set(true)));
    assert_eq!(outcome, Ok(SubmitOutcome::InvalidCredentials));

    page.cleanup();

    assert_eq!(root.markers(), vec!["light"]);
    assert!(!navigated.get());
}
