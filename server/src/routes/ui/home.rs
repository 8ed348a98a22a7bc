//! Home page: role selector

use agrochain_core::{Role, Route};
use askama::Template;
use axum::{response::Html, routing::get, Router};

use super::{not_found, AppError};
use crate::{state::AppState, templates::*};

/// Create home router
pub fn routes() -> Router<AppState> {
    Router::new().route(Route::Home.path(), get(home_page).fallback(not_found))
}

/// Home page handler
async fn home_page() -> Result<Html<String>, AppError> {
    let template = HomeTemplate {
        roles: Role::ALL.iter().map(Role::summary).collect(),
        features: &FEATURES,
    };
    Ok(Html(template.render()?))
}
