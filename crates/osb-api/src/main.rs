//! Open Source Buddy chat API server.
//!
//! Serves chat turns over REST, holding per-session conversation context in
//! memory. Replies come from the remote agent endpoint when configured,
//! otherwise from canned fallback text.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use osb_api::config::ApiConfig;
use osb_api::routes;
use osb_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "osb-api starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading config file");
            ApiConfig::from_file(&path)?
        }
        None => ApiConfig::from_env(),
    };

    let state = AppState::from_config(&config.agent);
    tracing::info!(mode = state.resolver.mode_name(), "reply mode selected");

    let app = routes::build_router_with_origins(state, &config.cors_origins);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
