//! Buffered Console Output
//!
//! A buffered write accumulates heterogeneous values into one textual
//! payload and flushes it into the line session exactly once, when the
//! buffer goes out of scope. The guarantee holds on every exit path,
//! including early returns and unwinding, because the flush lives in `Drop`.

use std::fmt;

use crate::console::Console;
use crate::surface::RenderSurface;

/// A value accepted by a buffered write
///
/// The conversion set is closed: the kind is declared at the call site
/// rather than dispatched open-endedly. Values with no textual conversion
/// are tagged [`BufferValue::Unsupported`]; they are logged and contribute
/// nothing to the buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferValue {
    /// Raw text, appended as-is
    Text(String),
    /// Signed numeric value
    Integer(i64),
    /// Unsigned numeric value
    Unsigned(u64),
    /// Floating-point value
    Float(f64),
    /// A kind with no textual conversion; carries the kind name for the log
    Unsupported(&'static str),
}

impl BufferValue {
    /// Build a `Text` value from anything with a `Display` form
    ///
    /// This is the generic-convertible strategy: the conversion happens at
    /// the call site, so the buffer itself only ever sees the closed set.
    pub fn from_display<T: fmt::Display>(value: &T) -> Self {
        BufferValue::Text(value.to_string())
    }

    /// Textual form of the value, or `None` for unsupported kinds
    fn render(&self) -> Option<String> {
        match self {
            BufferValue::Text(text) => Some(text.clone()),
            BufferValue::Integer(value) => Some(value.to_string()),
            BufferValue::Unsigned(value) => Some(value.to_string()),
            BufferValue::Float(value) => Some(value.to_string()),
            BufferValue::Unsupported(_) => None,
        }
    }
}

impl From<&str> for BufferValue {
    fn from(value: &str) -> Self {
        BufferValue::Text(value.to_string())
    }
}

impl From<String> for BufferValue {
    fn from(value: String) -> Self {
        BufferValue::Text(value)
    }
}

impl From<char> for BufferValue {
    fn from(value: char) -> Self {
        BufferValue::Text(value.to_string())
    }
}

impl From<i32> for BufferValue {
    fn from(value: i32) -> Self {
        BufferValue::Integer(i64::from(value))
    }
}

impl From<i64> for BufferValue {
    fn from(value: i64) -> Self {
        BufferValue::Integer(value)
    }
}

impl From<u32> for BufferValue {
    fn from(value: u32) -> Self {
        BufferValue::Unsigned(u64::from(value))
    }
}

impl From<u64> for BufferValue {
    fn from(value: u64) -> Self {
        BufferValue::Unsigned(value)
    }
}

impl From<usize> for BufferValue {
    fn from(value: usize) -> Self {
        BufferValue::Unsigned(value as u64)
    }
}

impl From<f32> for BufferValue {
    fn from(value: f32) -> Self {
        BufferValue::Float(f64::from(value))
    }
}

impl From<f64> for BufferValue {
    fn from(value: f64) -> Self {
        BufferValue::Float(value)
    }
}

/// Scoped accumulator for one buffered write
///
/// Exclusively borrows the console for its lifetime; when it drops, the
/// accumulated text is flushed into the session as history lines and a fresh
/// active line is created, even if the buffer is empty.
pub struct OutputBuffer<'a, S: RenderSurface> {
    console: &'a mut Console<S>,
    buffer: String,
}

impl<'a, S: RenderSurface> OutputBuffer<'a, S> {
    pub(crate) fn new(console: &'a mut Console<S>) -> Self {
        Self {
            console,
            buffer: String::new(),
        }
    }

    /// Append the textual form of `value` to the buffer
    ///
    /// Unsupported kinds are reported through the log and skipped; the write
    /// itself is never aborted.
    pub fn push(&mut self, value: impl Into<BufferValue>) -> &mut Self {
        let value = value.into();
        match value.render() {
            Some(text) => self.buffer.push_str(&text),
            None => {
                if let BufferValue::Unsupported(kind) = value {
                    warn!(kind, "unsupported value kind in buffered write; skipped");
                }
            }
        }
        self
    }

    /// Append anything with a `Display` form
    pub fn push_display<T: fmt::Display>(&mut self, value: &T) -> &mut Self {
        self.push(BufferValue::from_display(value))
    }

    /// The text accumulated so far
    pub fn buffered(&self) -> &str {
        &self.buffer
    }
}

impl<S: RenderSurface> Drop for OutputBuffer<'_, S> {
    fn drop(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        self.console.commit_write(&text);
    }
}
