//! Command Dispatch
//!
//! When the user submits the active line, the prompt marker is stripped and
//! the remaining command text is delivered to every registered subscriber.
//! Emission is synchronous, in registration order, and fire-and-forget: the
//! dispatcher holds no other state and cannot fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::PROMPT_MARKER;

/// One submitted command, carried in multiple textual representations
///
/// All representations hold identical content; this is a compatibility
/// affordance for subscribers with different textual-type expectations, not
/// several different commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEvent {
    /// The command as a string
    pub text: String,
    /// The same command as raw UTF-8 bytes
    pub raw: Vec<u8>,
}

impl CommandEvent {
    /// Build the event and both of its representations
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let raw = text.clone().into_bytes();
        Self { text, raw }
    }
}

type Subscriber = Box<dyn FnMut(&CommandEvent)>;

/// Fan-out of submitted commands to host subscribers
#[derive(Default)]
pub struct CommandDispatcher {
    subscribers: Vec<Subscriber>,
}

impl CommandDispatcher {
    /// Create a dispatcher with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber invoked on every submitted command
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CommandEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Strip exactly one leading prompt marker from `raw_line`, then emit
    ///
    /// Only the marker character itself is removed; any whitespace after it
    /// is part of the command.
    pub fn extract_and_emit(&mut self, raw_line: &str) {
        let command = raw_line.strip_prefix(PROMPT_MARKER).unwrap_or(raw_line);
        self.emit(command);
    }

    /// Notify every subscriber of `command`, in registration order
    pub fn emit(&mut self, command: &str) {
        let event = CommandEvent::new(command);
        debug!(subscribers = self.subscribers.len(), "dispatching command");
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
