//! Role dashboard routes
//!
//! One generic page serves the farmer, distributor, retailer and service
//! dashboards. The form state is rebuilt from each submission; nothing is
//! kept between requests.

use std::collections::HashMap;

use agrochain_core::{Role, RoleDashboard, RoleDefinition, Route};
use askama::Template;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::Form;

use super::{is_htmx, not_found, AppError};
use crate::{state::AppState, templates::*};

/// Create dashboard router: `GET` renders, `POST` submits
pub fn routes() -> Router<AppState> {
    Role::DASHBOARDS
        .into_iter()
        .fold(Router::new(), |router, role| {
            router.route(
                Route::from(role).path(),
                get(move || dashboard_page(role))
                    .post(
                        move |headers: HeaderMap, Form(input): Form<HashMap<String, String>>| {
                            dashboard_submit(role, headers, input)
                        },
                    )
                    .fallback(not_found),
            )
        })
}

fn definition(role: Role) -> Result<&'static RoleDefinition, AppError> {
    role.dashboard()
        .ok_or_else(|| AppError::InternalError(format!("No dashboard defined for {}", role)))
}

/// Dashboard page handler
async fn dashboard_page(role: Role) -> Result<Html<String>, AppError> {
    let dashboard = RoleDashboard::new(definition(role)?);

    let template = DashboardTemplate {
        definition: dashboard.definition(),
        fields: FieldView::from_record(dashboard.definition(), dashboard.record()),
        notification: None,
    };
    Ok(Html(template.render()?))
}

/// Form submission handler
///
/// On success the form comes back empty with a success toast. When a
/// required field is missing the values come back untouched, without a
/// toast, as 422 (HTMX leaves the form in place).
async fn dashboard_submit(
    role: Role,
    headers: HeaderMap,
    input: HashMap<String, String>,
) -> Result<Response, AppError> {
    let mut dashboard = RoleDashboard::new(definition(role)?);
    dashboard.bind(input);

    let (status, notification) = match dashboard.submit() {
        Ok(notification) => (StatusCode::OK, Some(notification)),
        Err(e) => {
            tracing::debug!(%role, "Rejected submission: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, None)
        }
    };

    let definition = dashboard.definition();
    let fields = FieldView::from_record(definition, dashboard.record());

    let html = if is_htmx(&headers) {
        DashboardFormTemplate {
            definition,
            fields,
            notification,
        }
        .render()?
    } else {
        DashboardTemplate {
            definition,
            fields,
            notification,
        }
        .render()?
    };

    Ok((status, Html(html)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    use crate::{config::Config, routes};

    fn app() -> axum::Router {
        routes::app(AppState::new(Config::default()))
    }

    fn encode(pairs: &[(&str, &str)]) -> String {
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn filled_pairs(role: Role) -> Vec<(&'static str, &'static str)> {
        role.dashboard()
            .unwrap()
            .fields
            .iter()
            .map(|f| (f.name, "Sample"))
            .collect()
    }

    async fn post(uri: &str, body: String, htmx: bool) -> (StatusCode, String) {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded");
        if htmx {
            req = req.header("HX-Request", "true");
        }
        let resp = app()
            .oneshot(req.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_submit_success_resets_form_and_toasts_once() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().unwrap();
            let (status, body) = post(&def.path(), encode(&filled_pairs(role)), true).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.matches("class=\"toast toast-success\"").count(), 1);
            assert!(body.contains(def.success_title));
            assert!(!body.contains("value=\"Sample\""), "{} form not reset", role);
            assert!(body.contains("hx-swap-oob"));
        }
    }

    #[tokio::test]
    async fn test_submit_missing_required_keeps_values_without_toast() {
        let mut pairs = filled_pairs(Role::Farmer);
        pairs.retain(|(name, _)| *name != "location");

        let (status, body) = post("/farmer", encode(&pairs), true).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.contains("toast"));
        assert!(body.contains("value=\"Sample\""));
    }

    #[tokio::test]
    async fn test_plain_post_renders_full_page() {
        let (status, body) = post(
            "/distributor",
            encode(&filled_pairs(Role::Distributor)),
            false,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("Transport details updated on blockchain!"));
    }

    #[tokio::test]
    async fn test_unsupported_method_renders_fallback() {
        let state = AppState::new(Config::default());
        let resp = routes::app(state.clone())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/farmer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let entries = state.diagnostics.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].method, "DELETE");
        assert_eq!(entries[0].path, "/farmer");
    }

    #[tokio::test]
    async fn test_undeclared_fields_ignored() {
        let mut body = encode(&filled_pairs(Role::Retailer));
        body.push_str("&bogus=1");
        let (status, _) = post("/retailer", body, true).await;
        assert_eq!(status, StatusCode::OK);
    }
}
