//! Unit tests for buffered console output

#[path = "../test_utils/mod.rs"]
mod test_utils;

use shellpane::BufferValue;
use test_utils::ready_console;

fn history_contents(console: &shellpane::Console<shellpane::HeadlessSurface>) -> Vec<String> {
    console
        .session()
        .history()
        .iter()
        .map(|line| line.content.clone())
        .collect()
}

#[test]
fn test_heterogeneous_values_concatenate() {
    let mut console = ready_console();
    console
        .write("processed ")
        .push(3_u64)
        .push(" of ")
        .push(10_i32)
        .push(" (")
        .push(0.3_f64)
        .push(')');

    assert_eq!(
        history_contents(&console).last().map(String::as_str),
        Some("processed 3 of 10 (0.3)")
    );
}

#[test]
fn test_unsupported_value_contributes_nothing() {
    let mut console = ready_console();
    console
        .write("before")
        .push(BufferValue::Unsupported("opaque handle"))
        .push("after");

    assert_eq!(
        history_contents(&console).last().map(String::as_str),
        Some("beforeafter")
    );
}

#[test]
fn test_display_values_use_their_display_form() {
    let mut console = ready_console();
    console
        .writer()
        .push_display(&std::net::Ipv4Addr::LOCALHOST);

    assert_eq!(
        history_contents(&console).last().map(String::as_str),
        Some("127.0.0.1")
    );
}

#[test]
fn test_empty_buffer_still_creates_fresh_active_line() {
    let mut console = ready_console();
    let lines_before = console.session().len();
    console.writer();

    // One frozen prompt line was added, plus a fresh active line.
    assert_eq!(console.session().len(), lines_before + 1);
    assert_eq!(console.session().active_content(), Some(">"));
}

#[test]
fn test_buffer_flushes_exactly_once_per_scope() {
    let mut console = ready_console();
    {
        let mut buffer = console.write("one flush");
        buffer.push(" only");
        assert_eq!(buffer.buffered(), "one flush only");
        // Nothing flushed while the buffer is alive.
    }

    let history = history_contents(&console);
    assert_eq!(history.last().map(String::as_str), Some("one flush only"));
    assert_eq!(
        history
            .iter()
            .filter(|content| content.contains("one flush"))
            .count(),
        1
    );
}

#[test]
fn test_buffer_flushes_on_early_return() {
    fn write_and_bail(console: &mut shellpane::Console<shellpane::HeadlessSurface>) -> Option<()> {
        let mut buffer = console.write("partial");
        buffer.push(" payload");
        let rest: Option<&str> = None;
        buffer.push(rest?);
        Some(())
    }

    let mut console = ready_console();
    assert!(write_and_bail(&mut console).is_none());

    assert_eq!(
        history_contents(&console).last().map(String::as_str),
        Some("partial payload")
    );
}

#[test]
fn test_multiline_payload_becomes_separate_lines() {
    let mut console = ready_console();
    console.write("y\nz");

    let history = history_contents(&console);
    let tail: Vec<_> = history.iter().rev().take(2).rev().collect();
    assert_eq!(tail, vec!["y", "z"]);
}
