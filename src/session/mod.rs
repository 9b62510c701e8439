//! Line-Session State Machine
//!
//! Owns the ordered list of console lines and the identity of the single
//! active (editable) line. All mutation of the line list goes through this
//! module: buffered output is flushed into history lines here, user edits are
//! normalized against the prompt marker here, and submits freeze the active
//! line and create its successor here.
//!
//! Session invariants:
//!
//! - At most one line has role `Active`; exactly one once the session is
//!   initialized, and it is always the most recently appended line.
//! - History lines are never mutated, removed, or reordered.
//! - Every active line's content starts with [`PROMPT_MARKER`]; edits that
//!   drop the marker are corrected rather than rejected.

pub mod line;

pub use line::{Line, LineId, LineRole, PROMPT_MARKER};

use crate::error::{Error, Result};

/// Session-level lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No lines yet; `initialize` has not been called
    Uninitialized,
    /// Exactly one active line exists at the tail
    Ready,
}

/// The ordered sequence of lines plus the active-line bookkeeping
#[derive(Debug)]
pub struct LineSession {
    /// Append-only except for the Active -> History transition of the tail
    lines: Vec<Line>,
    /// Lifecycle state
    state: SessionState,
    /// Structural-change counter; bumped whenever the line list changes shape
    generation: u64,
}

impl LineSession {
    /// Create an uninitialized session
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            state: SessionState::Uninitialized,
            generation: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether `initialize` has completed
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Structural-change generation token
    ///
    /// Incremented once per initialize/flush/submit. Deferred work (focus
    /// placement) compares against this to detect staleness.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All lines in display order, active line last
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines, active line included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True before the first line exists
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The unique active line, if the session is initialized
    pub fn active_line(&self) -> Option<&Line> {
        self.lines.last().filter(|line| line.editable())
    }

    /// Content of the active line
    pub fn active_content(&self) -> Option<&str> {
        self.active_line().map(|line| line.content.as_str())
    }

    /// The history lines (everything except the trailing active line)
    pub fn history(&self) -> &[Line] {
        match self.active_line() {
            Some(_) => &self.lines[..self.lines.len() - 1],
            None => &self.lines,
        }
    }

    /// History contents joined with newlines, for diagnostics and tests
    pub fn plain_history(&self) -> String {
        self.history()
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Transition Uninitialized -> Ready
    ///
    /// A non-empty welcome message is flushed as history content with a fresh
    /// active line after it; otherwise a single empty prompt line is created
    /// directly.
    pub fn initialize(&mut self, welcome: &str) -> Result<()> {
        if self.state == SessionState::Ready {
            warn!("initialize called on a ready session; ignoring");
            return Err(Error::AlreadyInitialized);
        }

        self.state = SessionState::Ready;
        if welcome.is_empty() {
            self.push_active_line();
            self.generation += 1;
        } else {
            self.flush(welcome)?;
        }

        debug!(lines = self.lines.len(), "session initialized");
        Ok(())
    }

    /// Flush buffered output text into history lines
    ///
    /// `text` is split at newline boundaries; a trailing empty segment after
    /// a final newline is dropped (`str::lines` semantics, which also absorb
    /// `\r\n`). The current active line, if any, is frozen first with its
    /// content preserved verbatim. After the new history lines are appended,
    /// exactly one fresh active line is created.
    pub fn flush(&mut self, text: &str) -> Result<()> {
        self.ensure_ready("flush")?;

        self.freeze_active_line();
        let mut appended = 0_usize;
        for segment in text.lines() {
            self.lines.push(Line::history(segment));
            appended += 1;
        }
        self.push_active_line();
        self.generation += 1;

        debug!(appended, total = self.lines.len(), "flushed output into history");
        Ok(())
    }

    /// Apply a user-driven text change to the active line
    ///
    /// Enforces the prompt convention: content that does not start with the
    /// marker is rewritten to `marker + content`. The edit is never refused.
    /// Returns whether a correction was applied, so the rendering surface can
    /// rewrite its text field to the normalized content.
    pub fn edit_active(&mut self, new_raw: &str) -> Result<bool> {
        self.ensure_ready("edit_active")?;

        let Some(line) = self.lines.last_mut() else {
            return Err(Error::SessionNotReady { operation: "edit_active" });
        };

        let corrected = !new_raw.starts_with(PROMPT_MARKER);
        line.content = if corrected {
            debug!("prompt marker restored on active line");
            format!("{PROMPT_MARKER}{new_raw}")
        } else {
            new_raw.to_string()
        };
        Ok(corrected)
    }

    /// Submit the active line
    ///
    /// Strips exactly the one leading marker character (leading whitespace
    /// after it is kept), freezes the active line with its content unchanged,
    /// creates a fresh active line, and returns the stripped text for
    /// dispatch. This is the sole user-driven Active -> History transition.
    pub fn submit_active(&mut self) -> Result<String> {
        self.ensure_ready("submit_active")?;

        let command = match self.lines.last_mut() {
            Some(line) => {
                let stripped = line
                    .content
                    .strip_prefix(PROMPT_MARKER)
                    .unwrap_or(line.content.as_str())
                    .to_string();
                line.freeze();
                stripped
            }
            None => return Err(Error::SessionNotReady { operation: "submit_active" }),
        };

        self.push_active_line();
        self.generation += 1;

        debug!(total = self.lines.len(), "active line submitted");
        Ok(command)
    }

    fn ensure_ready(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SessionState::Ready => Ok(()),
            SessionState::Uninitialized => Err(Error::SessionNotReady { operation }),
        }
    }

    fn freeze_active_line(&mut self) {
        if let Some(line) = self.lines.last_mut() {
            if line.editable() {
                line.freeze();
            }
        }
    }

    fn push_active_line(&mut self) {
        self.lines.push(Line::active(PROMPT_MARKER.to_string()));
    }
}

impl Default for LineSession {
    fn default() -> Self {
        Self::new()
    }
}
