use super::*;

fn session() -> SessionState {
    let mut s = SessionState::new("sk-test");
    s.logged_in = true;
    s.current_user = Some("alice".into());
    s
}

fn assistant_at(s: &SessionState, index: usize) -> &AssistantMessage {
    s.chat_history[index]
        .as_assistant()
        .expect("expected assistant message")
}

// =============================================================================
// ensure_welcome
// =============================================================================

#[test]
fn welcome_fires_once_on_empty_history() {
    let mut s = session();
    assert!(ensure_welcome(&mut s));
    assert!(!ensure_welcome(&mut s));
    assert_eq!(s.chat_history.len(), 1);
    assert_eq!(assistant_at(&s, 0).attribution, "Default welcome message");
    assert_eq!(assistant_at(&s, 0).related_questions.len(), 3);
}

#[test]
fn welcome_skipped_when_history_present() {
    let mut s = session();
    submit_user_message(&mut s, "revenue").unwrap();
    assert!(!ensure_welcome(&mut s));
    assert_eq!(s.chat_history.len(), 2);
}

// =============================================================================
// submit_user_message
// =============================================================================

#[test]
fn submit_appends_user_then_assistant() {
    let mut s = session();
    let reply = submit_user_message(&mut s, "monthly revenue").unwrap();

    assert_eq!(s.chat_history.len(), 2);
    assert_eq!(s.chat_history[0], Message::User(UserMessage { content: "monthly revenue".into() }));
    assert_eq!(s.chat_history[1], Message::Assistant(reply.clone()));
    assert_eq!(reply.related_questions.len(), 3);
    assert!(reply.content.contains("monthly revenue"));
}

#[test]
fn submit_reply_matches_template() {
    let mut s = session();
    let reply = submit_user_message(&mut s, "churn").unwrap();
    assert_eq!(reply.content, "Response #1: Here is what I found about \"churn\".");
    assert_eq!(
        reply.related_questions,
        vec![
            "What are the key trends in churn?".to_owned(),
            "How does churn compare to the previous period?".to_owned(),
            "Which segments contribute most to churn?".to_owned(),
        ]
    );
    assert_eq!(reply.attribution, "Mock analysis generated for: churn");
    assert_eq!(reply.drill_down_data, "Drill-down for \"churn\": breakdown by region, product and channel.");
}

#[test]
fn submit_running_index_counts_assistant_turns() {
    let mut s = session();
    ensure_welcome(&mut s);
    let first = submit_user_message(&mut s, "a").unwrap();
    let second = submit_user_message(&mut s, "b").unwrap();
    assert!(first.content.starts_with("Response #2:"));
    assert!(second.content.starts_with("Response #3:"));
    assert_eq!(s.chat_history.len(), 5);
}

#[test]
fn submit_empty_text_rejected_without_change() {
    let mut s = session();
    let err = submit_user_message(&mut s, "").unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));
    assert!(s.chat_history.is_empty());
}

#[test]
fn submit_whitespace_text_is_accepted() {
    let mut s = session();
    for text in ["   ", "\n"] {
        let reply = submit_user_message(&mut s, text).unwrap();
        assert!(reply.content.contains(text));
    }
    assert_eq!(s.chat_history.len(), 4);
    assert_eq!(s.chat_history[0], Message::User(UserMessage { content: "   ".into() }));
}

#[test]
fn submit_multibyte_text_is_echoed_verbatim() {
    let mut s = session();
    let reply = submit_user_message(&mut s, "ventas en España").unwrap();
    assert_eq!(reply.content, "Response #1: Here is what I found about \"ventas en España\".");
}

#[test]
fn select_related_question_rejects_empty_text() {
    let mut s = session();
    let original = welcome_message();
    assert!(select_related_question(&mut s, &original, "", 0).is_err());
    assert!(select_related_question(&mut s, &original, " ", 0).is_ok());
    assert_eq!(s.chat_history.len(), 2);
}

// =============================================================================
// related questions
// =============================================================================

#[test]
fn related_reply_uses_index_mod_three() {
    let original = welcome_message();
    let q = "What can you do?";

    let r0 = related_reply(&original, q, 0, 1);
    let r1 = related_reply(&original, q, 1, 1);
    let r2 = related_reply(&original, q, 2, 1);
    let r3 = related_reply(&original, q, 3, 1);

    assert_eq!(r0.related_questions[0], "Tell me more about drivers for What can you do?");
    assert_eq!(r1.related_questions[1], "Tell me more about products for What can you do?");
    assert_eq!(r2.related_questions[2], "Tell me more about last quarter for What can you do?");
    assert_eq!(r3.related_questions, r0.related_questions);
    assert_eq!(r3.attribution, r0.attribution);
}

#[test]
fn related_reply_attribution_references_original() {
    let original = welcome_message();
    let reply = related_reply(&original, "Show me the key metrics", 1, 4);
    assert_eq!(reply.attribution, format!("Follow-up to related question 2: {WELCOME_CONTENT}"));
    assert_eq!(reply.content, "Response #4: Here is what I found about \"Show me the key metrics\".");
}

#[test]
fn select_related_at_appends_exchange() {
    let mut s = session();
    ensure_welcome(&mut s);

    let reply = select_related_at(&mut s, 0, 1).unwrap();
    assert_eq!(s.chat_history.len(), 3);
    assert_eq!(s.chat_history[1], Message::User(UserMessage { content: "Show me the key metrics".into() }));
    assert_eq!(reply.related_questions.len(), 3);
    assert!(reply.related_questions[0].contains("regions"));
}

#[test]
fn select_related_at_rejects_user_message() {
    let mut s = session();
    submit_user_message(&mut s, "q").unwrap();
    let err = select_related_at(&mut s, 0, 0).unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));
    assert_eq!(s.chat_history.len(), 2);
}

#[test]
fn select_related_at_rejects_out_of_range() {
    let mut s = session();
    ensure_welcome(&mut s);
    assert!(select_related_at(&mut s, 7, 0).is_err());
    assert!(select_related_at(&mut s, 0, 3).is_err());
    assert_eq!(s.chat_history.len(), 1);
}

#[test]
fn select_related_at_only_offers_first_three() {
    let mut s = session();
    let mut extra = welcome_message();
    extra.related_questions.push("fourth".into());
    s.chat_history.push(Message::Assistant(extra));
    assert!(select_related_at(&mut s, 0, 3).is_err());
}
