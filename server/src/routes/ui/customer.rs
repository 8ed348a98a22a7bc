//! Customer journey routes
//!
//! The viewer state (identifier and current view) travels with each
//! request; every handler rebuilds a `JourneyViewer`, applies one
//! transition and renders the result.

use agrochain_core::{JourneyView, JourneyViewer, Notification, Route, SAMPLE_PRODUCT};
use askama::Template;
use axum::{
    http::HeaderMap,
    response::Html,
    routing::{get, post},
    Router,
};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{is_htmx, not_found, AppError};
use crate::{state::AppState, templates::*};

/// Create customer router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(Route::Customer.path(), get(customer_page).fallback(not_found))
        .route("/customer/track", post(journey_track).fallback(not_found))
        .route("/customer/sample", post(journey_sample).fallback(not_found))
        .route("/customer/share", post(journey_share).fallback(not_found))
        .route("/customer/reset", post(journey_reset).fallback(not_found))
}

#[derive(Debug, Default, Deserialize)]
pub struct IdentifierInput {
    #[serde(default)]
    pub identifier: String,
}

/// Render the viewer as a full page or as the `#journey-panel` fragment
fn render(
    headers: &HeaderMap,
    viewer: &JourneyViewer,
    notification: Option<Notification>,
) -> Result<Html<String>, AppError> {
    let identifier = viewer.identifier().to_string();
    let show_result = viewer.view() == JourneyView::Result;
    let stages = viewer.stages();

    let html = if is_htmx(headers) {
        JourneyPanelTemplate {
            identifier,
            show_result,
            product: SAMPLE_PRODUCT,
            stages,
            notification,
        }
        .render()?
    } else {
        CustomerTemplate {
            identifier,
            show_result,
            product: SAMPLE_PRODUCT,
            stages,
            notification,
        }
        .render()?
    };
    Ok(Html(html))
}

/// Customer page handler (input view)
async fn customer_page(headers: HeaderMap) -> Result<Html<String>, AppError> {
    render(&headers, &JourneyViewer::new(), None)
}

/// Track the entered identifier
async fn journey_track(
    headers: HeaderMap,
    Form(input): Form<IdentifierInput>,
) -> Result<Html<String>, AppError> {
    let mut viewer = JourneyViewer::new();
    viewer.set_identifier(input.identifier);
    let notification = viewer.track();
    render(&headers, &viewer, Some(notification))
}

/// Load the sample product
async fn journey_sample(headers: HeaderMap) -> Result<Html<String>, AppError> {
    let mut viewer = JourneyViewer::new();
    let notification = viewer.load_sample();
    tracing::info!(identifier = viewer.identifier(), "Sample journey loaded");
    render(&headers, &viewer, Some(notification))
}

/// Share the displayed journey; the result view stays in place
async fn journey_share(
    headers: HeaderMap,
    Form(input): Form<IdentifierInput>,
) -> Result<Html<String>, AppError> {
    let viewer = JourneyViewer::with_state(input.identifier, JourneyView::Result);
    let notification = viewer.share();
    render(&headers, &viewer, Some(notification))
}

/// Return to the input view, keeping the identifier
async fn journey_reset(
    headers: HeaderMap,
    Form(input): Form<IdentifierInput>,
) -> Result<Html<String>, AppError> {
    let mut viewer = JourneyViewer::with_state(input.identifier, JourneyView::Result);
    viewer.reset();
    render(&headers, &viewer, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{config::Config, routes};

    const STAGE_TITLES: [&str; 5] = [
        "Farm Origin",
        "Quality Inspection",
        "Transportation",
        "Retail Store",
        "Purchase",
    ];

    async fn post(uri: &str, body: &str) -> String {
        let resp = routes::app(AppState::new(Config::default()))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .header("HX-Request", "true")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Stage markup only, so the two result paths can be compared directly
    fn timeline(body: &str) -> &str {
        let start = body.find("<ol class=\"timeline\">").expect("timeline");
        let end = body[start..].find("</ol>").expect("timeline end") + start;
        &body[start..end]
    }

    #[tokio::test]
    async fn test_track_empty_stays_on_input() {
        for body in ["identifier=", "identifier=+++"] {
            let html = post("/customer/track", body).await;
            assert!(html.contains("Track Product Journey"));
            assert!(!html.contains("class=\"timeline\""));
            assert!(html.contains("Please enter a QR code or product ID"));
            assert!(html.contains("toast-error"));
        }
    }

    #[tokio::test]
    async fn test_track_identifier_shows_result() {
        let html = post("/customer/track", "identifier=0x1234567890abcdef").await;
        assert!(html.contains("Product found! Displaying journey..."));
        for title in STAGE_TITLES {
            assert!(html.contains(title), "missing stage {}", title);
        }
    }

    #[tokio::test]
    async fn test_sample_and_manual_timelines_identical() {
        let manual = post("/customer/track", "identifier=something-else").await;
        let sample = post("/customer/sample", "").await;
        assert!(sample.contains("Sample product loaded!"));
        assert!(sample.contains("value=\"0x1234567890abcdef\""));
        assert_eq!(timeline(&manual), timeline(&sample));
    }

    #[tokio::test]
    async fn test_share_keeps_journey_and_toasts() {
        let html = post("/customer/share", "identifier=0x1234567890abcdef").await;
        assert_eq!(html.matches("Journey shared successfully!").count(), 1);
        assert!(html.contains("hx-swap-oob"));
        assert!(html.contains("class=\"timeline\""));
        assert!(html.contains("Scan Another Product"));
    }

    #[tokio::test]
    async fn test_get_on_action_paths_renders_fallback() {
        let state = AppState::new(Config::default());
        let paths = [
            "/customer/track",
            "/customer/sample",
            "/customer/share",
            "/customer/reset",
        ];
        for path in paths {
            let resp = routes::app(state.clone())
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", path);
            let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8(bytes.to_vec())
                .unwrap()
                .contains("Oops! Page not found"));
        }

        let recorded: Vec<_> = state
            .diagnostics
            .entries()
            .await
            .into_iter()
            .map(|e| (e.method, e.path))
            .collect();
        assert_eq!(recorded.len(), paths.len());
        assert!(recorded.iter().all(|(method, _)| method == "GET"));
        assert_eq!(recorded[0].1, "/customer/track");
    }

    #[tokio::test]
    async fn test_reset_returns_to_input_keeping_identifier() {
        let html = post("/customer/reset", "identifier=abc123").await;
        assert!(html.contains("Track Product Journey"));
        assert!(html.contains("value=\"abc123\""));
        assert!(!html.contains("toast"));
    }
}
