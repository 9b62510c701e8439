//! Unit tests for the line-session state machine

use shellpane::{Error, LineRole, LineSession, PROMPT_MARKER};

fn ready_session() -> LineSession {
    let mut session = LineSession::new();
    session.initialize("").expect("initialize");
    session
}

fn history_contents(session: &LineSession) -> Vec<&str> {
    session
        .history()
        .iter()
        .map(|line| line.content.as_str())
        .collect()
}

#[test]
fn test_new_session_is_uninitialized() {
    let session = LineSession::new();

    assert!(!session.is_ready());
    assert!(session.is_empty());
    assert!(session.active_line().is_none());
    assert_eq!(session.generation(), 0);
}

#[test]
fn test_initialize_creates_single_prompt_line() {
    let session = ready_session();

    assert!(session.is_ready());
    assert_eq!(session.len(), 1);
    assert_eq!(session.active_content(), Some(">"));
    assert!(session.active_line().unwrap().editable());
}

#[test]
fn test_initialize_with_multiline_welcome() {
    let mut session = LineSession::new();
    session.initialize("line one\nline two").unwrap();

    assert_eq!(history_contents(&session), vec!["line one", "line two"]);
    assert_eq!(session.active_content(), Some(">"));
}

#[test]
fn test_second_initialize_is_an_error() {
    let mut session = ready_session();

    assert!(matches!(
        session.initialize(""),
        Err(Error::AlreadyInitialized)
    ));
}

#[test]
fn test_line_splitting_law() {
    // flush("a\nb\nc") -> three history lines, in order.
    let mut session = LineSession::new();
    session.initialize("a\nb\nc").unwrap();
    assert_eq!(history_contents(&session), vec!["a", "b", "c"]);

    // flush("a\nb\n") -> two history lines, trailing empty segment dropped.
    let mut session = LineSession::new();
    session.initialize("a\nb\n").unwrap();
    assert_eq!(history_contents(&session), vec!["a", "b"]);
}

#[test]
fn test_flush_of_empty_text() {
    let mut session = ready_session();
    session.flush("").unwrap();

    // No output segments, but the old prompt froze and a fresh active line
    // exists.
    assert_eq!(history_contents(&session), vec![">"]);
    assert_eq!(session.active_content(), Some(">"));
}

#[test]
fn test_flush_freezes_edited_active_line_verbatim() {
    let mut session = ready_session();
    session.edit_active(">half typed").unwrap();
    session.flush("interrupting output").unwrap();

    assert_eq!(
        history_contents(&session),
        vec![">half typed", "interrupting output"]
    );
    assert_eq!(session.active_content(), Some(">"));
}

#[test]
fn test_prompt_marker_is_restored_on_every_edit() {
    let mut session = ready_session();

    for raw in ["no marker", "", "x", "   ", "he>llo"] {
        session.edit_active(raw).unwrap();
        let content = session.active_content().unwrap();
        assert!(content.starts_with(PROMPT_MARKER), "content {:?}", content);
        assert_eq!(content, format!(">{raw}"));
    }
}

#[test]
fn test_edit_with_marker_is_stored_unchanged() {
    let mut session = ready_session();
    let corrected = session.edit_active(">exact text").unwrap();

    assert!(!corrected);
    assert_eq!(session.active_content(), Some(">exact text"));
}

#[test]
fn test_submit_returns_stripped_text_and_freezes() {
    let mut session = ready_session();
    session.edit_active(">help me").unwrap();

    assert_eq!(session.submit_active().unwrap(), "help me");

    let frozen = session.history().last().unwrap();
    assert_eq!(frozen.content, ">help me");
    assert_eq!(frozen.role, LineRole::History);
    assert!(!frozen.editable());
}

#[test]
fn test_submit_empty_prompt_yields_empty_command() {
    let mut session = ready_session();
    assert_eq!(session.submit_active().unwrap(), "");
    assert_eq!(history_contents(&session), vec![">"]);
}

#[test]
fn test_submit_strips_only_the_marker_character() {
    let mut session = ready_session();
    session.edit_active(">   indented").unwrap();
    assert_eq!(session.submit_active().unwrap(), "   indented");

    session.edit_active(">>double").unwrap();
    assert_eq!(session.submit_active().unwrap(), ">double");
}

#[test]
fn test_single_active_line_through_mixed_operations() {
    let mut session = ready_session();

    session.flush("one\ntwo").unwrap();
    session.edit_active(">first").unwrap();
    session.submit_active().unwrap();
    session.flush("three").unwrap();
    session.submit_active().unwrap();

    let active_lines = session
        .lines()
        .iter()
        .filter(|line| line.role == LineRole::Active)
        .count();
    assert_eq!(active_lines, 1);
    assert!(session.lines().last().unwrap().editable());
}

#[test]
fn test_history_is_append_only() {
    let mut session = ready_session();
    session.flush("a").unwrap();
    let before: Vec<_> = session
        .history()
        .iter()
        .map(|line| (line.id.clone(), line.content.clone()))
        .collect();

    session.edit_active(">typing").unwrap();
    session.submit_active().unwrap();
    session.flush("b\nc").unwrap();

    let after: Vec<_> = session
        .history()
        .iter()
        .map(|line| (line.id.clone(), line.content.clone()))
        .collect();
    assert!(after.len() > before.len());
    assert_eq!(&after[..before.len()], &before[..]);
}

#[test]
fn test_operations_before_initialize_fail() {
    let mut session = LineSession::new();

    assert!(matches!(
        session.flush("x"),
        Err(Error::SessionNotReady { .. })
    ));
    assert!(matches!(
        session.edit_active(">x"),
        Err(Error::SessionNotReady { .. })
    ));
    assert!(matches!(
        session.submit_active(),
        Err(Error::SessionNotReady { .. })
    ));
}
