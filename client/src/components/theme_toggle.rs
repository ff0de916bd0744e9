//! Light/dark switch bound to the ambient theme controller.

use leptos::prelude::*;

use crate::state::theme::ThemeController;

/// Button that flips and persists the stored theme preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeController>();
    let preference = theme.signal();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| {
                theme.toggle();
            }
            title="Toggle dark mode"
        >
            {move || preference.get().toggle_icon()}
        </button>
    }
}
