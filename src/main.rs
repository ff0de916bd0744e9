mod config;
mod routes;
mod services;
mod state;

use services::accounts::{AccountError, AccountStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::PortalConfig::from_env().expect("invalid configuration");

    // A missing accounts file is non-fatal: the portal starts but nobody can sign in.
    let accounts = match AccountStore::load(&config.accounts_file) {
        Ok(store) => {
            if store.is_empty() {
                tracing::warn!(path = %config.accounts_file.display(), "accounts file lists no members");
            } else {
                tracing::info!(accounts = store.len(), path = %config.accounts_file.display(), "accounts loaded");
            }
            store
        }
        Err(AccountError::Io { path, source }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "accounts file not found — logins disabled");
            AccountStore::default()
        }
        Err(e) => panic!("accounts load failed: {e}"),
    };

    let state = state::AppState::new(accounts, &config);

    // Spawn background session sweep.
    let _sweeper = services::session::spawn_session_sweeper(state.sessions.clone(), config.session_sweep);

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "delta-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
