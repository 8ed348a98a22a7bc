//! REST API v1 endpoints
//!
//! ```text
//! /api/v1/
//! ├── health                      GET     Health check
//! └── diagnostics/not-found       GET     Recorded unmatched routes
//! ```

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tracing::{debug, instrument};

use crate::state::AppState;

/// Create the v1 API router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/diagnostics/not-found", get(missed_routes))
}

/// Health check endpoint
///
/// ## Response
/// ```json
/// {
///   "status": "ok",
///   "service": "agrochain",
///   "version": "0.1.0"
/// }
/// ```
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "agrochain",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Paths the fallback page was rendered for, oldest first
#[instrument(skip(state))]
async fn missed_routes(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.diagnostics.entries().await;
    Json(json!({
        "capacity": state.diagnostics.capacity(),
        "count": entries.len(),
        "entries": entries,
    }))
}
