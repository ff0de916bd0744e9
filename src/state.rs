//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the immutable account store, the live session map, and the
//! cookie settings. Clone is cheap: every field is `Arc`-backed or `Copy`.

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::services::accounts::AccountStore;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountStore>,
    pub sessions: SessionStore,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(accounts: AccountStore, config: &PortalConfig) -> Self {
        Self {
            accounts: Arc::new(accounts),
            sessions: SessionStore::new(config.session_ttl),
            cookie_secure: config.cookie_secure,
        }
    }
}
