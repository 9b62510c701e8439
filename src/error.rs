//! Error types and Result alias for shellpane

use std::fmt;

/// Result type alias for shellpane operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shellpane
///
/// The error surface is deliberately narrow: the line session has no
/// recoverable failure states, so errors only describe host-API misuse.
#[derive(Debug)]
pub enum Error {
    /// `initialize` was called on an already-initialized console
    AlreadyInitialized,

    /// A session operation was attempted before `initialize`
    SessionNotReady {
        operation: &'static str,
    },

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyInitialized => {
                write!(f, "Console is already initialized")
            }
            Error::SessionNotReady { operation } => {
                write!(f, "Session operation '{}' requires an initialized console", operation)
            }
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
