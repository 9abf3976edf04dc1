//! Session state — the explicit per-session context every handler mutates.
//!
//! DESIGN
//! ======
//! One `SessionState` exists per browser session, keyed by the opaque
//! `session_token` cookie. Services take `&mut SessionState` and never reach
//! for ambient globals. Messages are a tagged enum so assistant-only fields
//! cannot appear on user turns.

use std::fmt::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog;

// =============================================================================
// TOKENS
// =============================================================================

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A required field was missing or not acceptable. Recovered by
    /// re-displaying the form with the message.
    #[error("{0}")]
    Validation(String),
    #[error("login required")]
    Unauthenticated,
}

impl SessionError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// Main-area view selected from the sidebar. Sessions start on `Chat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Chat,
    Metrics,
    History,
}

impl View {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Metrics => "metrics",
            Self::History => "history",
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantMessage {
    pub content: String,
    /// Suggested follow-ups. Only the first three are ever offered.
    pub related_questions: Vec<String>,
    pub attribution: String,
    pub drill_down_data: String,
}

/// One chat turn. Append-only; history order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    User(UserMessage),
    Assistant(AssistantMessage),
}

impl Message {
    #[must_use]
    pub fn as_assistant(&self) -> Option<&AssistantMessage> {
        match self {
            Self::Assistant(m) => Some(m),
            Self::User(_) => None,
        }
    }
}

// =============================================================================
// METRICS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    /// Catalog length + 1 at insertion time.
    pub id: usize,
    pub name: String,
    pub description: String,
}

// =============================================================================
// SESSION STATE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub current_user: Option<String>,
    pub chat_history: Vec<Message>,
    pub selected_model: String,
    pub selected_language: String,
    pub api_key: String,
    pub current_view: View,
    /// Session-local metric catalog, seeded from [`catalog::seed_metrics`].
    pub metrics: Vec<MetricDefinition>,
}

impl SessionState {
    /// Fresh session: logged out, empty history, default selections.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            logged_in: false,
            current_user: None,
            chat_history: Vec::new(),
            selected_model: catalog::DEFAULT_MODEL.to_owned(),
            selected_language: catalog::DEFAULT_LANGUAGE.to_owned(),
            api_key: api_key.into(),
            current_view: View::default(),
            metrics: catalog::seed_metrics(),
        }
    }

    /// Gate for every action behind the login page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Unauthenticated`] when not logged in.
    pub fn require_login(&self) -> Result<(), SessionError> {
        if self.logged_in { Ok(()) } else { Err(SessionError::Unauthenticated) }
    }

    /// Number of assistant turns in the history.
    #[must_use]
    pub fn assistant_turns(&self) -> usize {
        self.chat_history
            .iter()
            .filter(|m| matches!(m, Message::Assistant(_)))
            .count()
    }

    /// Switch the main view. No guards, no side effects beyond the write.
    pub fn navigate(&mut self, view: View) {
        tracing::info!(from = self.current_view.as_str(), to = view.as_str(), "view changed");
        self.current_view = view;
    }

    /// # Errors
    ///
    /// Returns a validation error if `name` is not a catalog model.
    pub fn select_model(&mut self, name: &str) -> Result<(), SessionError> {
        if !catalog::is_known_model(name) {
            return Err(SessionError::validation(format!("Unknown model: {name}")));
        }
        self.selected_model = name.to_owned();
        tracing::info!(model = name, "model selected");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a validation error if `name` is not a catalog language.
    pub fn select_language(&mut self, name: &str) -> Result<(), SessionError> {
        if !catalog::is_known_language(name) {
            return Err(SessionError::validation(format!("Unknown language: {name}")));
        }
        self.selected_language = name.to_owned();
        tracing::info!(language = name, "language selected");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
