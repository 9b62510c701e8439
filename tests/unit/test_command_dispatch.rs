//! Unit tests for command dispatch

use std::cell::RefCell;
use std::rc::Rc;

use shellpane::{CommandDispatcher, CommandEvent};

#[test]
fn test_one_notification_per_submit() {
    let received: Rc<RefCell<Vec<CommandEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);

    let mut dispatcher = CommandDispatcher::new();
    dispatcher.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    dispatcher.extract_and_emit(">list");
    assert_eq!(received.borrow().len(), 1);

    dispatcher.extract_and_emit(">list again");
    assert_eq!(received.borrow().len(), 2);
}

#[test]
fn test_representations_carry_identical_content() {
    let received: Rc<RefCell<Vec<CommandEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);

    let mut dispatcher = CommandDispatcher::new();
    dispatcher.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    dispatcher.extract_and_emit(">status --all");

    let events = received.borrow();
    assert_eq!(events[0].text, "status --all");
    assert_eq!(events[0].raw, events[0].text.as_bytes());
}

#[test]
fn test_marker_is_stripped_exactly_once() {
    let received: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);

    let mut dispatcher = CommandDispatcher::new();
    dispatcher.subscribe(move |event| sink.borrow_mut().push(event.text.clone()));

    dispatcher.extract_and_emit(">help me");
    dispatcher.extract_and_emit(">> nested");
    dispatcher.extract_and_emit("bare text");
    dispatcher.extract_and_emit(">");

    assert_eq!(
        *received.borrow(),
        vec![
            "help me".to_string(),
            "> nested".to_string(),
            "bare text".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn test_every_subscriber_is_notified_in_order() {
    let order: Rc<RefCell<Vec<(&str, String)>>> = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = CommandDispatcher::new();
    for tag in ["logger", "executor"] {
        let sink = Rc::clone(&order);
        dispatcher.subscribe(move |event| sink.borrow_mut().push((tag, event.text.clone())));
    }
    assert_eq!(dispatcher.subscriber_count(), 2);

    dispatcher.emit("run");

    assert_eq!(
        *order.borrow(),
        vec![("logger", "run".to_string()), ("executor", "run".to_string())]
    );
}

#[test]
fn test_emission_with_no_subscribers() {
    let mut dispatcher = CommandDispatcher::new();
    // Fire-and-forget: emitting into the void is fine.
    dispatcher.extract_and_emit(">anyone there");
}
