//! HTTP surface for Atelier.

mod error;
mod routes;
mod state;

/// API error with status mapping.
pub use error::ApiError;
/// Shared request-handler state.
pub use state::AppState;

use atelier_rs_config::AtelierConfig;
use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Assemble the router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .route("/generate-outfit", post(routes::generate_outfit))
        .route(
            "/generate-outfit-offline",
            post(routes::generate_outfit_offline),
        )
        .route("/api/memories/search", post(routes::search_memories))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: AtelierConfig) -> anyhow::Result<()> {
    let bind_addr = config.server.bind_addr.clone();
    let state = Arc::new(AppState::from_config(&config)?);
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening (addr={bind_addr})");
    axum::serve(listener, router).await?;
    Ok(())
}
