//! HTMX + Tailwind web server for Marquee
//!
//! Provides both HTMX partial updates and JSON API endpoints.
//! All pages use server-side rendering; loading regions poll until settled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::config::MarqueeConfig;
use marquee_core::{CatalogProvider, MarqueeError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_search, api_session, control_filter, control_key, control_search, control_text, health,
    results_region,
};
use crate::pages::search_page;
use crate::sessions::SessionRegistry;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Live search screen sessions
    pub sessions: SessionRegistry,
    /// Catalog shared by every session and the JSON API
    pub catalog: Arc<dyn CatalogProvider>,
    /// Configuration the server was started with
    pub config: Arc<MarqueeConfig>,
}

impl AppState {
    /// Creates state with an empty session registry.
    pub fn new(config: MarqueeConfig, catalog: Arc<dyn CatalogProvider>) -> Self {
        let sessions = SessionRegistry::new(Arc::clone(&catalog), config.search.clone());
        Self {
            sessions,
            catalog,
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Main page
        .route("/", get(search_page))
        // HTMX partial update endpoints
        .route("/htmx/sessions/{id}/text", post(control_text))
        .route("/htmx/sessions/{id}/key", post(control_key))
        .route("/htmx/sessions/{id}/search", post(control_search))
        .route("/htmx/sessions/{id}/filter", post(control_filter))
        .route("/htmx/sessions/{id}/results", get(results_region))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .route("/api/sessions/{id}", get(api_session))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until ctrl-c.
///
/// # Errors
/// - `MarqueeError::Io` - The listener could not be bound
/// - `MarqueeError::Server` - The server stopped with an error
pub async fn run_server(
    config: MarqueeConfig,
    catalog: Arc<dyn CatalogProvider>,
) -> Result<(), MarqueeError> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, catalog);

    let sweeper = state.sessions.spawn_sweeper(
        state.config.server.sweep_interval,
        state.config.server.session_idle_timeout,
    );

    let listener = tokio::net::TcpListener::bind(&address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        "Marquee search UI running on http://{} (catalog: {})",
        local_addr,
        state.catalog.name()
    );

    let app = build_router(state);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    sweeper.abort();
    served.map_err(|e| MarqueeError::Server {
        reason: e.to_string(),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down web server");
}
