//! Portal member accounts loaded from a YAML file.
//!
//! Passwords are stored as SHA-256 hex digests and compared in constant time.
//! There is no lockout and no attempt counter: a failed check is simply
//! `None`.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::services::session::{SessionUser, bytes_to_hex};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("cannot read accounts file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed accounts file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate username: {0}")]
    DuplicateUsername(String),
    #[error("account {0} has an invalid password hash")]
    InvalidHash(String),
    #[error("account with empty username")]
    EmptyUsername,
}

/// One entry of the accounts file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub password_sha256: String,
}

#[derive(Debug, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<AccountRecord>,
}

/// Immutable username → account map.
#[derive(Debug, Default)]
pub struct AccountStore {
    by_username: HashMap<String, AccountRecord>,
}

/// SHA-256 hex digest of a password, as stored in the accounts file.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn is_sha256_hex(raw: &str) -> bool {
    raw.len() == 64 && raw.chars().all(|c| c.is_ascii_hexdigit())
}

impl AccountStore {
    /// Load accounts from `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if the file cannot be read or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, AccountError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AccountError::Io { path: path.to_owned(), source })?;
        Self::from_yaml(&raw)
    }

    /// Parse the YAML accounts document.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] on malformed YAML, an empty or duplicate
    /// username, or a password hash that is not 64 hex characters.
    pub fn from_yaml(raw: &str) -> Result<Self, AccountError> {
        let file: AccountsFile = serde_yaml::from_str(raw)?;
        let mut by_username = HashMap::with_capacity(file.accounts.len());
        for mut record in file.accounts {
            if record.username.is_empty() {
                return Err(AccountError::EmptyUsername);
            }
            if !is_sha256_hex(&record.password_sha256) {
                return Err(AccountError::InvalidHash(record.username));
            }
            record.password_sha256.make_ascii_lowercase();
            if by_username.contains_key(&record.username) {
                return Err(AccountError::DuplicateUsername(record.username));
            }
            by_username.insert(record.username.clone(), record);
        }
        Ok(Self { by_username })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_username.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_username.is_empty()
    }

    /// Check a credential pair. Usernames are case-sensitive.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> Option<SessionUser> {
        let candidate = hash_password(password);
        let record = self.by_username.get(username)?;
        if !constant_time_eq(candidate.as_bytes(), record.password_sha256.as_bytes()) {
            return None;
        }
        let name = if record.name.trim().is_empty() { record.username.clone() } else { record.name.clone() };
        Some(SessionUser { username: record.username.clone(), name })
    }
}
