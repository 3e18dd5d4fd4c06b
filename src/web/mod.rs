mod error;
mod handlers;
mod routes;
pub mod security;
mod state;

pub use state::AppState;

use crate::services::PostStore;
use crate::Config;
use anyhow::Result;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.server.cors;

    let app = Router::new()
        .merge(routes::public_routes())
        .merge(routes::admin_routes())
        .layer(middleware::from_fn(security::apply_security_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let app = if cors_enabled {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.with_state(state)
}

pub async fn serve(config: Config, store: Arc<dyn PostStore>, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, store));
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
