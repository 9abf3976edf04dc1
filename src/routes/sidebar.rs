//! Sidebar routes: view navigation and model/language selection.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Json, Response};
use serde::Deserialize;

use super::session::{SessionToken, act, json_body};
use crate::services::session::View;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigateBody {
    pub view: View,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SettingsBody {
    pub model: Option<String>,
    pub language: Option<String>,
}

/// `POST /api/navigate` — switch the main view.
pub async fn navigate(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<NavigateBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        session.require_login()?;
        session.navigate(body?.view);
        Ok(())
    })
    .await
}

/// `POST /api/settings` — change the selected model and/or language.
pub async fn update_settings(
    State(state): State<AppState>,
    token: SessionToken,
    payload: Result<Json<SettingsBody>, JsonRejection>,
) -> Response {
    let body = json_body(payload);
    act(&state, &token, |session| {
        session.require_login()?;
        let body = body?;
        if let Some(model) = body.model.as_deref() {
            session.select_model(model)?;
        }
        if let Some(language) = body.language.as_deref() {
            session.select_language(language)?;
        }
        Ok(())
    })
    .await
}
