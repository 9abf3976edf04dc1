//! Session cookie plumbing and the shared action/response helpers.
//!
//! DESIGN
//! ======
//! Every request resolves to a session token: the `session_token` cookie if
//! present, a fresh random token otherwise. Every response re-issues the
//! cookie so a first visit is bound to its new session.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

use crate::services::session::{self, SessionError, SessionState};
use crate::services::view::{self, Page};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Token of the calling browser session. Never rejects.
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(COOKIE_NAME)
            .map(Cookie::value)
            .filter(|value| !value.is_empty())
            .map_or_else(session::generate_token, str::to_owned);
        Ok(Self(token))
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Body of every action response: the re-rendered page plus any
/// user-visible error.
#[derive(Debug, Serialize)]
pub struct PageEnvelope {
    pub page: Page,
    pub error: Option<String>,
}

pub(crate) fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn error_status(err: &SessionError) -> StatusCode {
    match err {
        SessionError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::Unauthenticated => StatusCode::UNAUTHORIZED,
    }
}

pub(crate) fn respond(state: &AppState, token: &SessionToken, status: StatusCode, body: impl Serialize) -> Response {
    let jar = CookieJar::new().add(session_cookie(&token.0, state.config.cookie_secure));
    (status, jar, Json(body)).into_response()
}

/// Unwrap a JSON body, turning a malformed payload into a validation error
/// so it is answered with the page envelope like any other bad input.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, SessionError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| SessionError::validation(rejection.body_text()))
}

/// Run a mutating action, then answer with the re-rendered page.
pub(crate) async fn act<F>(state: &AppState, token: &SessionToken, action: F) -> Response
where
    F: FnOnce(&mut SessionState) -> Result<(), SessionError>,
{
    let (status, envelope) = state
        .sessions
        .with_session(&token.0, |session| {
            let outcome = action(session);
            let page = view::render(session);
            match outcome {
                Ok(()) => (StatusCode::OK, PageEnvelope { page, error: None }),
                Err(err) => (error_status(&err), PageEnvelope { page, error: Some(err.to_string()) }),
            }
        })
        .await;
    respond(state, token, status, envelope)
}

/// Run a read, answering with its value or, on failure, the page envelope.
pub(crate) async fn query<F, T>(state: &AppState, token: &SessionToken, read: F) -> Response
where
    F: FnOnce(&mut SessionState) -> Result<T, SessionError>,
    T: Serialize,
{
    let result = state
        .sessions
        .with_session(&token.0, |session| {
            read(session).map_err(|err| {
                let page = view::render(session);
                (error_status(&err), PageEnvelope { page, error: Some(err.to_string()) })
            })
        })
        .await;

    match result {
        Ok(value) => respond(state, token, StatusCode::OK, value),
        Err((status, envelope)) => respond(state, token, status, envelope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_maps_validation() {
        let err = SessionError::Validation("x".into());
        assert_eq!(error_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_status_maps_unauthenticated() {
        assert_eq!(error_status(&SessionError::Unauthenticated), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn json_body_passes_through_valid_payload() {
        assert_eq!(json_body(Ok(Json(7_u32))), Ok(7));
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("abc", true);
        assert_eq!(cookie.name(), COOKIE_NAME);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
