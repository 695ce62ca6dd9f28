//! REST surface of the menu advisor.
//!
//! Stateless by design: every request carries whatever conversation data it
//! needs (`dishes`, `qa`), so handlers share nothing but the completion
//! client handle and fixed configuration in [`AppState`].
//!
//! Routes:
//! - `POST /extract_menu`  — multipart menu photos → structured dishes
//! - `POST /next_question` — dishes + history → one clarifying question
//! - `POST /recommend`     — dishes + history → ranked recommendation text
//! - `GET  /health`        — liveness + configured model

mod core;
pub mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::routes::{
    extract_menu::extract_menu_route::extract_menu, health::health_route::health,
    next_question::next_question_route::next_question, recommend::recommend_route::recommend,
};

/// Builds the application router over the shared state.
///
/// Kept separate from [`start`] so tests can drive the exact production
/// router without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/extract_menu", post(extract_menu))
        .route("/next_question", post(next_question))
        .route("/recommend", post(recommend))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Binds the listener and serves until Ctrl+C.
///
/// # Errors
/// Returns [`AppError::Bind`] when the address cannot be bound and
/// [`AppError::Server`] for serve-loop failures.
pub async fn start(state: AppState, addr: &str) -> Result<(), AppError> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
