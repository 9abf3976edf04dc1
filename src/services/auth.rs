//! Login gate. Any non-empty username/password pair is accepted; there is
//! no credential store.

use super::session::{SessionError, SessionState};

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password";

/// Log the session in as `username`.
///
/// # Errors
///
/// Returns [`SessionError::Validation`] if either field is empty. State is
/// left untouched in that case.
pub fn attempt_login(session: &mut SessionState, username: &str, password: &str) -> Result<(), SessionError> {
    if username.is_empty() || password.is_empty() {
        tracing::warn!("login attempt with missing credentials");
        return Err(SessionError::validation(MISSING_CREDENTIALS));
    }

    session.logged_in = true;
    session.current_user = Some(username.to_owned());
    tracing::info!(user = username, "user logged in");
    Ok(())
}

/// Drop identity and chat history. Model, language, API key and the metric
/// catalog survive.
pub fn logout(session: &mut SessionState) {
    let user = session.current_user.take();
    session.logged_in = false;
    session.chat_history.clear();
    tracing::info!(user = user.as_deref().unwrap_or("<anonymous>"), "user logged out");
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
