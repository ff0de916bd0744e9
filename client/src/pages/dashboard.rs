//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login navigates here on success. Visitors without a session are sent back
//! to `/login` once the initial `/api/auth/me` lookup has finished.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::about_line_tab::AboutLineTab;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Greeting line for the header.
pub(crate) fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.trim().is_empty() => format!("Olá, {}", user.name.trim()),
        Some(user) => format!("Olá, {}", user.username),
        None => "Olá".to_owned(),
    }
}

/// Dashboard page — greeting, theme toggle, logout, and the line briefing.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.resolve(None));
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Carregando..." } else { "Redirecionando para o login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">{move || auth.with(|a| greeting(a.user.as_ref()))}</span>
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                    <button class="btn toolbar__logout" on:click=on_logout title="Sair">
                        "Sair"
                    </button>
                </header>
                <main class="dashboard-page__briefing">
                    <h2>"Briefing"</h2>
                    <AboutLineTab/>
                </main>
            </div>
        </Show>
    }
}
