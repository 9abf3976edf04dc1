//! Chat routes: free-form prompts and related-question follow-ups.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Json, Response};
use serde::Deserialize;

use super::session::{SessionToken, act, json_body};
use crate::services::chat as chat_svc;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitBody {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RelatedBody {
    /// Index of the assistant message in the chat history.
    pub message_index: usize,
    /// Index into that message's related questions.
    pub question_index: usize,
}

/// `POST /api/chat/messages` — append a prompt and its mock reply.
pub async fn submit_message(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<SubmitBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        session.require_login()?;
        chat_svc::submit_user_message(session, &body?.text)?;
        Ok(())
    })
    .await
}

/// `POST /api/chat/related` — follow one of an assistant turn's related questions.
pub async fn select_related(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<RelatedBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        session.require_login()?;
        let body = body?;
        chat_svc::select_related_at(session, body.message_index, body.question_index)?;
        Ok(())
    })
    .await
}
