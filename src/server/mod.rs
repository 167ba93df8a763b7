//! HTTP front end.
//!
//! ```text
//! GET /recommend/{item_id}[?limit=N]  → {"recommendations": [...]}
//! GET /health                         → store counts
//! ```
//!
//! The server only ever sees a fully loaded store behind an `Arc`, so no
//! request can run before loading has finished.

mod api;

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::engine::Recommender;
use crate::error::{RecommendError, Result};

/// Router state handed to every handler.
///
/// Cheap to clone — the engine is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Recommender>,
    /// Used when a request has no `?limit=`.
    pub default_limit: usize,
    /// Requests asking for more are clamped to this.
    pub max_limit: usize,
}

impl AppState {
    pub fn new(engine: Arc<Recommender>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            engine,
            default_limit,
            max_limit,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend/{item_id}", get(api::recommend))
        .route("/health",              get(api::health))
        .with_state(state)
}

/// Bind `bind_addr` and serve until `shutdown` resolves.
pub async fn serve<F>(bind_addr: &str, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| RecommendError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RecommendError::Server(format!("server error: {e}")))?;

    info!("server shut down");
    Ok(())
}
