//! Main HTTP Gateway Server.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::post,
    Router,
};
use glimpse_core::{CaptionModel, GlimpseError};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::describe;
use crate::error::ApiError;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub model: Arc<dyn CaptionModel>,
    /// Request body cap in bytes; `None` lifts the limit entirely.
    pub max_upload_bytes: Option<usize>,
}

impl GatewayState {
    pub fn new(model: Arc<dyn CaptionModel>) -> Self {
        Self {
            model,
            max_upload_bytes: None,
        }
    }

    pub fn with_upload_limit(mut self, max_upload_bytes: Option<usize>) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Build the gateway router: `POST /describe` and a JSON 404 for everything else.
pub fn build_router(state: GatewayState) -> Router {
    let body_limit = match state.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route(
            "/describe",
            post(describe::describe).fallback(not_found),
        )
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError(GlimpseError::NotFound)
}

/// Starts the gateway and serves until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://localhost:{}", listener.local_addr()?.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
