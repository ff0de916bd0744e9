//! Temporary dark presentation for the login page.
//!
//! The override writes markers on the visual root only; the stored preference
//! is never touched. On exit the root is put back to `light` when the
//! preference read at that moment is `light`, otherwise it is left as is.

#[cfg(test)]
#[path = "theme_override_test.rs"]
mod theme_override_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeController, ThemePreference};
use crate::util::theme_root::{self, ThemeRoot};

/// Scoped dark override on a theme root.
#[must_use = "an override that is never released leaves the root dark"]
#[derive(Debug)]
pub struct DarkOverride<R: ThemeRoot> {
    root: R,
}

impl<R: ThemeRoot> DarkOverride<R> {
    /// Force the `dark` marker onto `root`.
    pub fn engage(root: R) -> Self {
        theme_root::apply(&root, ThemePreference::Dark);
        Self { root }
    }

    /// Force `dark` again after something else rewrote the root.
    pub fn reassert(&self) {
        theme_root::apply(&self.root, ThemePreference::Dark);
    }

    /// End the override given the preference as it stands now.
    pub fn release(self, current: ThemePreference) {
        if current == ThemePreference::Light {
            self.root.remove_marker(ThemePreference::Dark);
            self.root.add_marker(ThemePreference::Light);
        }
    }
}

/// Hold a dark override on `root` for the current reactive owner.
///
/// Preference changes while mounted (e.g. the theme toggle) are applied by
/// the controller first, then the override is reasserted. The release in
/// `on_cleanup` reads the preference fresh.
pub fn install_dark_override<R>(theme: ThemeController, root: R)
where
    R: ThemeRoot + Clone + Send + Sync + 'static,
{
    let guard = DarkOverride::engage(root.clone());
    Effect::new(move || {
        let _ = theme.preference();
        theme_root::apply(&root, ThemePreference::Dark);
    });
    on_cleanup(move || guard.release(theme.preference_untracked()));
}
