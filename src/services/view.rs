//! Auth gate + view router.
//!
//! ARCHITECTURE
//! ============
//! `render` is the single entry point the routes call after every action.
//! It picks the login page or the main page, and for the main page
//! dispatches on `current_view` to exactly one view model. The only
//! mutation is the chat view's welcome seed; everything else is read-only.

use std::collections::BTreeMap;

use serde::Serialize;

use super::chat;
use super::history;
use super::session::{Message, MetricDefinition, SessionState, View};
use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub user: Option<String>,
    pub selected_model: String,
    pub selected_language: String,
    pub models: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub api_key_hint: String,
    pub current_view: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Chat { messages: Vec<Message> },
    Metrics { metrics: Vec<MetricDefinition> },
    History { groups: BTreeMap<String, Vec<Message>> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Page {
    Login,
    Main { sidebar: Sidebar, content: ViewModel },
}

/// Render the page for the session's current state.
pub fn render(session: &mut SessionState) -> Page {
    if !session.logged_in {
        tracing::info!("rendering login page");
        return Page::Login;
    }

    tracing::info!(view = session.current_view.as_str(), "rendering main page");
    let content = match session.current_view {
        View::Chat => {
            chat::ensure_welcome(session);
            ViewModel::Chat { messages: session.chat_history.clone() }
        }
        View::Metrics => ViewModel::Metrics { metrics: session.metrics.clone() },
        View::History => ViewModel::History { groups: history::grouped_history(session) },
    };

    Page::Main { sidebar: sidebar(session), content }
}

fn sidebar(session: &SessionState) -> Sidebar {
    Sidebar {
        user: session.current_user.clone(),
        selected_model: session.selected_model.clone(),
        selected_language: session.selected_language.clone(),
        models: catalog::MODELS.to_vec(),
        languages: catalog::LANGUAGES.to_vec(),
        api_key_hint: mask_api_key(&session.api_key),
        current_view: session.current_view,
    }
}

/// First 10 chars, `...`, then the last 5 chars for keys longer than 15.
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(10).collect();
    let tail: String = if chars.len() > 15 { chars[chars.len() - 5..].iter().collect() } else { String::new() };
    format!("{head}...{tail}")
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
