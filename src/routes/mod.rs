use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use folio_contact::SqliteStore;
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, render};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: SqliteStore,
    pub pool: SqlitePool,
}

pub async fn fallback() -> impl IntoResponse {
    render(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
