//! App-wide light/dark preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads the preference through `ThemeController`; only its setter
//! writes the stored value. The login page's dark override touches the
//! document root directly (see `util::theme_override`) so the override is
//! never persisted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::theme_root::{self, DocumentRoot};

/// The user's stored presentation choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Marker/class name and storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other preference.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button (the theme a click switches to).
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Reactive owner of the ambient preference, provided as context by `App`.
#[derive(Clone, Copy, Debug)]
pub struct ThemeController {
    preference: RwSignal<ThemePreference>,
}

impl ThemeController {
    pub fn new(initial: ThemePreference) -> Self {
        Self { preference: RwSignal::new(initial) }
    }

    /// Controller seeded from browser storage, with the marker applied.
    pub fn from_browser() -> Self {
        let initial = theme_root::read_preference();
        theme_root::apply(&DocumentRoot, initial);
        Self::new(initial)
    }

    /// Tracked read; callers inside effects or views re-run on change.
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn preference_untracked(&self) -> ThemePreference {
        self.preference.get_untracked()
    }

    /// Read-only handle for subscribers.
    pub fn signal(&self) -> ReadSignal<ThemePreference> {
        self.preference.read_only()
    }

    /// Store a new preference, persist it, and apply its marker.
    pub fn set_preference(&self, next: ThemePreference) {
        theme_root::persist(next);
        theme_root::apply(&DocumentRoot, next);
        self.preference.set(next);
    }

    pub fn toggle(&self) -> ThemePreference {
        let next = self.preference_untracked().toggled();
        self.set_preference(next);
        next
    }
}
