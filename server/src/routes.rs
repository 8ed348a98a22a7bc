//! HTTP routes

mod api;
mod ui;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::state::AppState;

/// Build the complete application router
///
/// Pages and fragments at the root, JSON under `/api/v1`, assets under
/// `/static`. Anything else falls through to the 404 page.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(ui::ui_routes())
        .nest(
            "/api/v1",
            api::routes().layer(CorsLayer::permissive()),
        )
        .nest_service("/static", static_dir)
        .fallback(ui::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(
                        |request: &axum::http::Request<_>| {
                            tracing::info_span!(
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                            )
                        },
                    ),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
