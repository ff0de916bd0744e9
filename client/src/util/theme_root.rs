//! Theme markers on the `<html>` element and preference storage.
//!
//! Reads the user's preference from `localStorage` and toggles the `light` /
//! `dark` classes on the document root. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_root_test.rs"]
mod theme_root_test;

use crate::state::theme::ThemePreference;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "delta_run_muscle_theme";

/// The visual root that carries the theme marker classes.
pub trait ThemeRoot {
    fn has_marker(&self, marker: ThemePreference) -> bool;
    fn add_marker(&self, marker: ThemePreference);
    fn remove_marker(&self, marker: ThemePreference);
}

impl<T: ThemeRoot + ?Sized> ThemeRoot for &T {
    fn has_marker(&self, marker: ThemePreference) -> bool {
        (**self).has_marker(marker)
    }

    fn add_marker(&self, marker: ThemePreference) {
        (**self).add_marker(marker);
    }

    fn remove_marker(&self, marker: ThemePreference) {
        (**self).remove_marker(marker);
    }
}

/// The document's `<html>` element. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl ThemeRoot for DocumentRoot {
    fn has_marker(&self, marker: ThemePreference) -> bool {
        #[cfg(feature = "hydrate")]
        {
            root_element().is_some_and(|el| el.class_list().contains(marker.as_str()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
            false
        }
    }

    fn add_marker(&self, marker: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let _ = el.class_list().add_1(marker.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
        }
    }

    fn remove_marker(&self, marker: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let _ = el.class_list().remove_1(marker.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
        }
    }
}

/// Make `pref` the only theme marker on `root`.
pub fn apply<R: ThemeRoot>(root: &R, pref: ThemePreference) {
    root.remove_marker(pref.toggled());
    if !root.has_marker(pref) {
        root.add_marker(pref);
    }
}

/// Read the stored preference.
///
/// Falls back to the system `prefers-color-scheme` when nothing is stored,
/// and to `Light` outside the browser.
pub fn read_preference() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemePreference::Light;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(pref) = ThemePreference::parse(&val) {
                    return pref;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemePreference::Dark } else { ThemePreference::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::Light
    }
}

/// Persist the preference to localStorage.
pub fn persist(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, pref.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pref;
    }
}

/// In-memory root for tests. Clones share the same marker set.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryRoot {
    markers: std::sync::Arc<std::sync::Mutex<std::collections::BTreeSet<&'static str>>>,
}

#[cfg(test)]
impl MemoryRoot {
    pub(crate) fn with(markers: &[ThemePreference]) -> Self {
        let root = Self::default();
        for marker in markers {
            root.add_marker(*marker);
        }
        root
    }

    pub(crate) fn markers(&self) -> Vec<&'static str> {
        self.markers.lock().unwrap().iter().copied().collect()
    }
}

#[cfg(test)]
impl ThemeRoot for MemoryRoot {
    fn has_marker(&self, marker: ThemePreference) -> bool {
        self.markers.lock().unwrap().contains(marker.as_str())
    }

    fn add_marker(&self, marker: ThemePreference) {
        self.markers.lock().unwrap().insert(marker.as_str());
    }

    fn remove_marker(&self, marker: ThemePreference) {
        self.markers.lock().unwrap().remove(marker.as_str());
    }
}
