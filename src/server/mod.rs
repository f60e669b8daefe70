//! HTTP surface of the proxy.

pub mod analyze;
pub mod error;

pub use analyze::{AnalyzeRequest, AnalyzeResponse};
pub use error::ApiError;

use crate::ai::ContentGenerator;
use crate::Result;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze::analyze))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // The handler already logs downstream failures at error level.
        .layer(
            TraceLayer::new_for_http()
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        .with_state(state)
}

/// Serve the router on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
