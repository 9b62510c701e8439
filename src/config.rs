//! Console Configuration
//!
//! The configuration is a plain value object: named visual attributes, a
//! welcome message, and the console mode tag. Color and size values are
//! opaque strings passed through to the rendering layer verbatim; nothing
//! here validates them (the rendering layer decides fallback behavior for
//! malformed values).

use serde::{Deserialize, Serialize};

/// Console operating mode
///
/// Only [`ConsoleMode::Shell`] is wired to behavior. `Text` is accepted in
/// configuration but currently inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConsoleMode {
    /// Shell mode: prompt-prefixed input lines and command dispatch
    #[default]
    Shell,
    /// Plain text mode (reserved, not wired to behavior)
    Text,
}

/// Visual and behavioral configuration for a console panel
///
/// Defaults match a plain dark terminal: black background, white text and
/// cursor, 20px font, shell mode, no welcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Console mode tag
    pub mode: ConsoleMode,
    /// Message flushed into history when the console initializes (empty = none)
    pub welcome_message: String,
    /// Panel background color (opaque string, e.g. `"black"` or `"#1e1e2e"`)
    pub background_color: String,
    /// Text color (opaque string)
    pub text_color: String,
    /// Text-cursor color on the input line (opaque string)
    pub cursor_color: String,
    /// Font size in pixels (opaque string, e.g. `"20"`)
    pub font_size: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: ConsoleMode::Shell,
            welcome_message: String::new(),
            background_color: "black".to_string(),
            text_color: "white".to_string(),
            cursor_color: "white".to_string(),
            font_size: "20".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the console mode
    pub fn with_mode(mut self, mode: ConsoleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the welcome message
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the text color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the cursor color
    pub fn with_cursor_color(mut self, color: impl Into<String>) -> Self {
        self.cursor_color = color.into();
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }
}
