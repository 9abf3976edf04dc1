//! Chat history viewer.
//!
//! Messages carry no timestamps, so every message lands in a single
//! "Current Session" group.

use std::collections::BTreeMap;

use super::session::{Message, SessionState};

pub const CURRENT_SESSION_GROUP: &str = "Current Session";

/// History grouped for display. Empty history yields no groups.
#[must_use]
pub fn grouped_history(session: &SessionState) -> BTreeMap<String, Vec<Message>> {
    let mut groups = BTreeMap::new();
    if !session.chat_history.is_empty() {
        groups.insert(CURRENT_SESSION_GROUP.to_owned(), session.chat_history.clone());
    }
    groups
}

/// Empty the chat history. Always succeeds.
pub fn clear_history(session: &mut SessionState) {
    let cleared = session.chat_history.len();
    session.chat_history.clear();
    tracing::info!(cleared, "chat history cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chat;

    fn session_with_history() -> SessionState {
        let mut s = SessionState::new("k");
        chat::ensure_welcome(&mut s);
        chat::submit_user_message(&mut s, "revenue").unwrap();
        s
    }

    #[test]
    fn groups_everything_under_current_session() {
        let s = session_with_history();
        let groups = grouped_history(&s);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[CURRENT_SESSION_GROUP], s.chat_history);
    }

    #[test]
    fn empty_history_has_no_groups() {
        let s = SessionState::new("k");
        assert!(grouped_history(&s).is_empty());
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut s = session_with_history();
        clear_history(&mut s);
        assert!(s.chat_history.is_empty());
        clear_history(&mut s);
        assert!(s.chat_history.is_empty());
    }
}
