//! Metric definition routes.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Json, Response};
use serde::Deserialize;

use super::session::{SessionToken, act, json_body, query};
use crate::services::metrics as metrics_svc;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddMetricBody {
    pub name: String,
    pub description: String,
    pub sample_sql: String,
}

/// `GET /api/metrics` — the session's catalog in insertion order.
pub async fn list_metrics(State(state): State<AppState>, token: SessionToken) -> Response {
    query(&state, &token, |session| {
        session.require_login()?;
        Ok(metrics_svc::list_metrics(session).to_vec())
    })
    .await
}

/// `POST /api/metrics` — append a metric definition.
pub async fn add_metric(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<AddMetricBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        session.require_login()?;
        let body = body?;
        metrics_svc::add_metric(session, &body.name, &body.description, &body.sample_sql)?;
        Ok(())
    })
    .await
}
