//! UI routes module - HTMX frontend

use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse},
    Router,
};

use agrochain_core::Route;

use crate::state::AppState;
use crate::templates::NotFoundTemplate;

// Sub-modules
pub mod certificates;
pub mod customer;
pub mod dashboard;
pub mod home;

/// Create UI router with all page and fragment routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Role selector
        .merge(home::routes())
        // Farmer, distributor, retailer, service
        .merge(dashboard::routes())
        .merge(certificates::routes())
        // Journey viewer
        .merge(customer::routes())
}

/// Whether the request was issued by HTMX (fragment) or a plain form post (full page)
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// 404 handler
///
/// Rendered for every request no handler claims: unknown paths, and
/// declared paths hit with a method they do not serve. The request is
/// recorded in the diagnostic sink.
pub async fn not_found(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let path = uri.path().to_string();
    if !Route::resolve(&path).is_not_found() {
        tracing::debug!(%method, path = %path, "Unsupported method on declared page");
    }
    state.diagnostics.record(method.as_str(), path.clone()).await;

    let template = NotFoundTemplate { path };
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Custom error type for UI routes
#[derive(Debug)]
pub enum AppError {
    TemplateError(String),
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", msg))
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", msg))
            }
        };

        (status, message).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateError(err.to_string())
    }
}
