//! Login form state: typed credentials plus the single-flight submit flag.
//!
//! DESIGN
//! ======
//! The page keeps this in an `RwSignal`; every transition is a plain method
//! so the submit flow can be exercised without a reactive runtime.

#[cfg(test)]
#[path = "session_entry_test.rs"]
mod session_entry_test;

/// Submit button label while idle.
pub const IDLE_LABEL: &str = "Entrar";
/// Submit button label while a login call is outstanding.
pub const SUBMITTING_LABEL: &str = "Entrando...";

/// A credential pair captured at submit time. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A required field was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("username is required")]
    MissingUsername,
    #[error("password is required")]
    MissingPassword,
}

/// Why a submit attempt did not start a login call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous call is still in flight.
    InFlight,
    /// A required field is empty.
    Invalid(EntryValidationError),
}

/// Form state owned by the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionEntryState {
    pub username: String,
    pub password: String,
    pub submitting: bool,
}

impl SessionEntryState {
    /// Current credentials, or the first empty required field.
    ///
    /// # Errors
    ///
    /// Returns [`EntryValidationError`] when either field is empty.
    pub fn credentials(&self) -> Result<Credentials, EntryValidationError> {
        if self.username.is_empty() {
            return Err(EntryValidationError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(EntryValidationError::MissingPassword);
        }
        Ok(Credentials { username: self.username.clone(), password: self.password.clone() })
    }

    /// Claim the single submit slot and snapshot the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked`] without touching state when a call is
    /// already in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let credentials = self.credentials().map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;
        Ok(credentials)
    }

    /// Release the submit slot. Credentials are kept for a retry.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { SUBMITTING_LABEL } else { IDLE_LABEL }
    }
}
