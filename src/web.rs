//! Web server wiring for the HTTP API

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::config::VayuConfig;

/// Run the API server until interrupted
pub async fn run(config: VayuConfig) -> Result<()> {
    let port = config.server.port;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(config))
        .layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("API server running at http://localhost:{port}");
    axum::serve(listener, app)
        .await
        .with_context(|| "API server stopped unexpectedly")?;
    Ok(())
}
