//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON endpoints the browser front end drives. Each
//! action endpoint answers with the freshly rendered page so the client
//! never has to guess what changed.

pub mod auth;
pub mod chat;
pub mod history;
pub mod metrics;
pub mod session;
pub mod sidebar;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/page", get(auth::page))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/navigate", post(sidebar::navigate))
        .route("/api/settings", post(sidebar::update_settings))
        .route("/api/chat/messages", post(chat::submit_message))
        .route("/api/chat/related", post(chat::select_related))
        .route("/api/metrics", get(metrics::list_metrics).post(metrics::add_metric))
        .route("/api/history", get(history::grouped_history).delete(history::clear_history))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
