//! Chat history routes.

use axum::extract::State;
use axum::response::Response;

use super::session::{SessionToken, act, query};
use crate::services::history as history_svc;
use crate::state::AppState;

/// `GET /api/history` — history grouped for display.
pub async fn grouped_history(State(state): State<AppState>, token: SessionToken) -> Response {
    query(&state, &token, |session| {
        session.require_login()?;
        Ok(history_svc::grouped_history(session))
    })
    .await
}

/// `DELETE /api/history` — empty the chat history.
pub async fn clear_history(State(state): State<AppState>, token: SessionToken) -> Response {
    act(&state, &token, |session| {
        session.require_login()?;
        history_svc::clear_history(session);
        Ok(())
    })
    .await
}
