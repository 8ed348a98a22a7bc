//! Certificate lookup fragment for the service dashboard

use agrochain_core::lookup_certificate;
use askama::Template;
use axum::{response::Html, routing::post, Router};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{not_found, AppError};
use crate::{state::AppState, templates::*};

/// Create certificate lookup router
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/service/certificates",
        post(certificate_search).fallback(not_found),
    )
}

#[derive(Debug, Deserialize)]
pub struct CertificateQuery {
    #[serde(default)]
    pub query: String,
}

/// Search handler
async fn certificate_search(
    Form(input): Form<CertificateQuery>,
) -> Result<Html<String>, AppError> {
    let lookup = lookup_certificate(&input.query);
    tracing::info!(
        query = %lookup.query,
        matches = lookup.matches.len(),
        "Certificate lookup"
    );

    let template = CertificateResultsTemplate {
        query: lookup.query,
        matches: lookup.matches,
        notification: Some(lookup.notification),
    };
    Ok(Html(template.render()?))
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

    async fn search(body: &str) -> String {
        let resp = routes::app(AppState::new(Config::default()))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/service/certificates")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_match_lists_record() {
        let body = search("query=BATCH-003").await;
        assert!(body.contains("Premium Carrots"));
        assert!(body.contains("toast-success"));
    }

    #[tokio::test]
    async fn test_get_renders_fallback() {
        let state = AppState::new(Config::default());
        let resp = routes::app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/service/certificates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.diagnostics.entries().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_errors() {
        let body = search("query=").await;
        assert!(body.contains("toast-error"));
    }
}
