//! Mock chat engine.
//!
//! DESIGN
//! ======
//! No model is called. Each assistant turn is a pure string template of the
//! prompt and a running index (assistant turns so far + 1), so the same
//! session replay always produces the same transcript.
//!
//! Following a related question reuses the submit path but draws its new
//! follow-ups from one of three fixed word lists, picked by
//! `question_index % 3`.

use super::session::{AssistantMessage, Message, SessionError, SessionState, UserMessage};

pub const WELCOME_CONTENT: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const WELCOME_ATTRIBUTION: &str = "Default welcome message";
const WELCOME_QUESTIONS: [&str; 3] = ["What can you do?", "Show me the key metrics", "How do I define a new metric?"];
const WELCOME_DRILL_DOWN: &str = "No drill-down data available yet.";

/// Follow-up vocabularies for related-question turns.
const SUBSTITUTIONS: [[&str; 3]; 3] = [
    ["drivers", "risks", "opportunities"],
    ["regions", "products", "channels"],
    ["last week", "last month", "last quarter"],
];

/// Related questions actually offered per assistant turn.
pub const MAX_RELATED_QUESTIONS: usize = 3;

// =============================================================================
// TEMPLATES
// =============================================================================

#[must_use]
pub fn welcome_message() -> AssistantMessage {
    AssistantMessage {
        content: WELCOME_CONTENT.to_owned(),
        related_questions: WELCOME_QUESTIONS.iter().map(|q| (*q).to_owned()).collect(),
        attribution: WELCOME_ATTRIBUTION.to_owned(),
        drill_down_data: WELCOME_DRILL_DOWN.to_owned(),
    }
}

/// Assistant reply to a free-form prompt.
#[must_use]
pub fn assistant_reply(text: &str, turn: usize) -> AssistantMessage {
    AssistantMessage {
        content: reply_content(text, turn),
        related_questions: vec![
            format!("What are the key trends in {text}?"),
            format!("How does {text} compare to the previous period?"),
            format!("Which segments contribute most to {text}?"),
        ],
        attribution: format!("Mock analysis generated for: {text}"),
        drill_down_data: drill_down(text),
    }
}

/// Assistant reply to a related question picked from `original`.
#[must_use]
pub fn related_reply(original: &AssistantMessage, question: &str, question_index: usize, turn: usize) -> AssistantMessage {
    let slot = question_index % SUBSTITUTIONS.len();
    AssistantMessage {
        content: reply_content(question, turn),
        related_questions: SUBSTITUTIONS[slot]
            .iter()
            .map(|word| format!("Tell me more about {word} for {question}"))
            .collect(),
        attribution: format!("Follow-up to related question {}: {}", slot + 1, original.content),
        drill_down_data: drill_down(question),
    }
}

fn reply_content(text: &str, turn: usize) -> String {
    format!("Response #{turn}: Here is what I found about \"{text}\".")
}

fn drill_down(text: &str) -> String {
    format!("Drill-down for \"{text}\": breakdown by region, product and channel.")
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Seed the welcome turn if the history is empty. Returns whether it fired.
pub fn ensure_welcome(session: &mut SessionState) -> bool {
    if !session.chat_history.is_empty() {
        return false;
    }
    session.chat_history.push(Message::Assistant(welcome_message()));
    tracing::info!("welcome message added");
    true
}

/// Append the user turn and its mock assistant reply.
///
/// # Errors
///
/// Returns a validation error for empty `text`. Whitespace is a valid prompt.
pub fn submit_user_message(session: &mut SessionState, text: &str) -> Result<AssistantMessage, SessionError> {
    if text.is_empty() {
        return Err(SessionError::validation("Message must not be empty"));
    }

    let reply = assistant_reply(text, session.assistant_turns() + 1);
    append_exchange(session, text, reply.clone());
    tracing::info!(user = session.current_user.as_deref(), chars = text.chars().count(), "message submitted");
    Ok(reply)
}

/// Follow `question_text`, one of `original`'s related questions.
///
/// # Errors
///
/// Returns a validation error for empty `question_text`.
pub fn select_related_question(
    session: &mut SessionState,
    original: &AssistantMessage,
    question_text: &str,
    question_index: usize,
) -> Result<AssistantMessage, SessionError> {
    if question_text.is_empty() {
        return Err(SessionError::validation("Related question must not be empty"));
    }

    let reply = related_reply(original, question_text, question_index, session.assistant_turns() + 1);
    append_exchange(session, question_text, reply.clone());
    tracing::info!(question_index, "related question selected");
    Ok(reply)
}

/// Resolve `(message_index, question_index)` against the history, then
/// [`select_related_question`].
///
/// # Errors
///
/// Returns a validation error if the message is missing, is a user turn, or
/// has no offered question at `question_index`.
pub fn select_related_at(
    session: &mut SessionState,
    message_index: usize,
    question_index: usize,
) -> Result<AssistantMessage, SessionError> {
    let original = session
        .chat_history
        .get(message_index)
        .and_then(Message::as_assistant)
        .cloned()
        .ok_or_else(|| SessionError::validation(format!("No assistant message at index {message_index}")))?;

    let question = original
        .related_questions
        .iter()
        .take(MAX_RELATED_QUESTIONS)
        .nth(question_index)
        .cloned()
        .ok_or_else(|| SessionError::validation(format!("No related question at index {question_index}")))?;

    select_related_question(session, &original, &question, question_index)
}

fn append_exchange(session: &mut SessionState, text: &str, reply: AssistantMessage) {
    session
        .chat_history
        .push(Message::User(UserMessage { content: text.to_owned() }));
    session.chat_history.push(Message::Assistant(reply));
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
