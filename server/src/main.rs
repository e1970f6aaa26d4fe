#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use config::{RelayConfig, ServerConfig};
use rate_limit::{RateLimitConfig, RateLimiter};
use services::contact::{ContactMailer, ResendMailer};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    // Contact relay is optional: the site still serves pages without it.
    let mailer: Option<Arc<dyn ContactMailer>> = match RelayConfig::from_env() {
        Ok(relay) => {
            tracing::info!(to = %relay.to, "contact relay configured");
            Some(Arc::new(ResendMailer::new(&relay)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact relay not configured");
            None
        }
    };

    let limits = RateLimitConfig::from_env();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );
    let state = state::AppState::new(mailer, RateLimiter::new(limits));
    if !state.relay_enabled() {
        tracing::warn!("POST /api/contact will answer 503 until RESEND_API_KEY, CONTACT_FROM and CONTACT_TO are set");
    }

    let app = routes::leptos_app(state, &config.assets_dir).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "sebat site listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
