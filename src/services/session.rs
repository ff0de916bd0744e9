//! In-memory login sessions.
//!
//! DESIGN
//! ======
//! Sessions map a random 32-byte hex token to the signed-in member. Each has a
//! fixed lifetime; expired entries are rejected on lookup and removed by a
//! periodic sweep. Restarting the server signs everyone out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Expiry used when the configured TTL does not fit the clock.
const LONGEST_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Member attached to a session; also the public JSON body of the auth API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
}

#[derive(Debug)]
struct Session {
    user: SessionUser,
    expires_at: Instant,
}

/// Token → session map shared by all handlers.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Lifetime given to new sessions.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Open a session for `user`, returning its token.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        let now = Instant::now();
        let expires_at = now.checked_add(self.ttl).unwrap_or_else(|| now + LONGEST_TTL);
        self.sessions
            .write()
            .await
            .insert(token.clone(), Session { user, expires_at });
        token
    }

    /// Member for a live token. An expired token is removed.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if session.expires_at > Instant::now() => return Some(session.user.clone()),
                Some(_) => {}
            }
        }
        self.sessions.write().await.remove(token);
        debug!("expired session rejected");
        None
    }

    /// Remove a session. Returns whether it existed.
    pub async fn delete(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        before - sessions.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawn the background sweep of expired sessions. Returns a handle for shutdown.
pub fn spawn_session_sweeper(store: SessionStore, every: Duration) -> JoinHandle<()> {
    info!(sweep_secs = every.as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = store.prune_expired().await;
            if removed > 0 {
                debug!(removed, "expired sessions pruned");
            }
        }
    })
}
