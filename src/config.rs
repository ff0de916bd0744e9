//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a key lookup closure so tests can supply values
//! without touching the process environment. `main` loads `.env` first via
//! `dotenvy`, then reads the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCOUNTS_FILE: &str = "accounts.yaml";
const DEFAULT_SESSION_TTL_HOURS: u64 = 24;
const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the portal server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// YAML file listing portal members.
    pub accounts_file: PathBuf,
    /// Lifetime of a login session.
    pub session_ttl: Duration,
    /// How often expired sessions are swept.
    pub session_sweep: Duration,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            accounts_file: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            session_sweep: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
            cookie_secure: false,
        }
    }
}

impl PortalConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let accounts_file = lookup("PORTAL_ACCOUNTS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.accounts_file, PathBuf::from);
        let ttl_hours: u64 = parse_var(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        let ttl_secs = ttl_hours
            .checked_mul(3600)
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: ttl_hours.to_string() })?;
        let sweep_secs: u64 = parse_var(&lookup, "SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS)?;
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => defaults.cookie_secure,
        };

        Ok(Self {
            port,
            accounts_file,
            session_ttl: Duration::from_secs(ttl_secs),
            session_sweep: Duration::from_secs(sweep_secs.max(1)),
            cookie_secure,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Parse the usual boolean spellings (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
