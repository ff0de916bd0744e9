//! Login page: username + password form against the portal's session API.
//!
//! The page holds a dark override on the document root for as long as it is
//! mounted; see `util::theme_override`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::state::session_entry::SessionEntryState;
use crate::state::theme::ThemeController;
use crate::util::theme_override::install_dark_override;
use crate::util::theme_root::DocumentRoot;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<ThemeController>();
    let navigate = use_navigate();
    let entry = RwSignal::new(SessionEntryState::default());

    install_dark_override(theme, DocumentRoot);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::util::auth::SessionAuthService;
            use crate::util::login_flow::{SubmitOutcome, submit_credentials};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let service = SessionAuthService::new(auth);
                let to_destination = |path: &str| navigate(path, NavigateOptions::default());
                match submit_credentials(&entry, &service, to_destination).await {
                    Ok(SubmitOutcome::Authenticated) => log::info!("login accepted"),
                    Ok(SubmitOutcome::InvalidCredentials) => log::info!("login rejected"),
                    Ok(SubmitOutcome::Blocked(reason)) => log::debug!("login not sent: {reason:?}"),
                    Ok(SubmitOutcome::Detached) => {}
                    Err(e) => log::error!("login failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, &navigate);
        }
    };

    let submitting = move || entry.with(|e| e.submitting);

    view! {
        <div class="login-page">
            <div class="login-page__toggle">
                <ThemeToggle/>
            </div>
            <div class="login-card">
                <div class="login-card__brand">
                    <span class="login-card__logo" aria-hidden="true">"⚡"</span>
                    <h1>
                        <span class="login-card__accent">"Delta"</span>
                        " Run Muscle"
                    </h1>
                    <p class="login-card__subtitle">"Acesse a área exclusiva de influenciadores"</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-field">
                        <span class="login-field__label">"Usuário"</span>
                        <input
                            class="login-input"
                            type="text"
                            name="username"
                            autocomplete="username"
                            placeholder="Usuário"
                            required
                            prop:value=move || entry.with(|e| e.username.clone())
                            on:input=move |ev| entry.update(|e| e.username = event_target_value(&ev))
                        />
                    </label>
                    <label class="login-field">
                        <span class="login-field__label">"Senha"</span>
                        <input
                            class="login-input"
                            type="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Senha"
                            required
                            prop:value=move || entry.with(|e| e.password.clone())
                            on:input=move |ev| entry.update(|e| e.password = event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || entry.with(SessionEntryState::submit_label)}
                    </button>
                </form>
                <div class="login-card__footer">
                    <p>"Área exclusiva para membros do Team Delta."</p>
                    <p>"Contate seu gerenciador para acesso."</p>
                </div>
            </div>
        </div>
    }
}
