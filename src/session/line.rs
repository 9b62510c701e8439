//! Line Model
//!
//! Represents a single console line: either an immutable history line or the
//! one editable active line. Lines carry a stable identifier so the rendering
//! surface can be told which row to make editable or focus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The prompt marker every active line's content starts with
pub const PROMPT_MARKER: char = '>';

/// Stable identifier for a line, usable as a reference across the
/// rendering-surface boundary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(String);

impl LineId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of a line in the session
///
/// `History` is terminal: once a line is frozen it never becomes active
/// again, is never edited, and is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRole {
    /// Immutable, display-only line
    History,
    /// The single editable line at the tail of the session
    Active,
}

/// A single console line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Unique identifier for the line
    pub id: LineId,

    /// The visible text (for an active line this includes the prompt marker)
    pub content: String,

    /// History or Active
    pub role: LineRole,

    /// When this line was created
    pub timestamp: DateTime<Utc>,
}

impl Line {
    /// Create a history line with the given content
    pub fn history(content: impl Into<String>) -> Self {
        Self {
            id: LineId::generate(),
            content: content.into(),
            role: LineRole::History,
            timestamp: Utc::now(),
        }
    }

    /// Create an active line with the given content
    pub fn active(content: impl Into<String>) -> Self {
        Self {
            id: LineId::generate(),
            content: content.into(),
            role: LineRole::Active,
            timestamp: Utc::now(),
        }
    }

    /// Whether this line accepts user edits (derived from the role)
    pub fn editable(&self) -> bool {
        matches!(self.role, LineRole::Active)
    }

    /// Transition Active -> History. The only role transition; one-way.
    pub(crate) fn freeze(&mut self) {
        self.role = LineRole::History;
    }
}
