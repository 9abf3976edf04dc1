//! Login gate routes: page render, login, logout.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Json, Response};
use serde::Deserialize;

use super::session::{SessionToken, act, json_body};
use crate::services::auth as auth_svc;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// `GET /api/page` — render whatever the session should see right now.
pub async fn page(State(state): State<AppState>, token: SessionToken) -> Response {
    act(&state, &token, |_| Ok(())).await
}

/// `POST /api/login` — accept any non-empty credentials.
pub async fn login(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<LoginBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        let body = body?;
        auth_svc::attempt_login(session, &body.username, &body.password)
    })
    .await
}

/// `POST /api/logout` — clear identity and history. Always succeeds.
pub async fn logout(State(state): State<AppState>, token: SessionToken) -> Response {
    act(&state, &token, |session| {
        auth_svc::logout(session);
        Ok(())
    })
    .await
}
