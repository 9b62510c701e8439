//! Rendering-Surface Capability Interface
//!
//! The console core never touches a UI toolkit directly. It drives anything
//! that can display an ordered list of text lines, mark one of them
//! editable, and report keystrokes on it - the [`RenderSurface`] trait. A
//! recording [`HeadlessSurface`] ships for hosts and tests; an egui
//! implementation is available behind the `egui-surface` feature.

pub mod headless;

#[cfg(feature = "egui-surface")]
pub mod egui;

pub use headless::HeadlessSurface;

#[cfg(feature = "egui-surface")]
pub use self::egui::EguiSurface;

use crate::session::{Line, LineId};
use crate::style::StyleSheet;

/// Explicit panel dimensions, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    /// Panel width
    pub width: f32,
    /// Panel height
    pub height: f32,
}

impl PanelSize {
    /// Create a panel size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Inbound events from the currently editable line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The user changed the editable line's text; carries the new raw text
    TextChanged(String),
    /// The submit key (return/enter) was pressed on the editable line
    SubmitPressed,
}

/// What the console core requires from a rendering surface
///
/// Implementations are presentation plumbing: they hold no line-session
/// state of their own and must tolerate being re-rendered from scratch
/// after every structural change.
pub trait RenderSurface {
    /// Display the full ordered line list; the active line is last
    fn render_lines(&mut self, lines: &[Line]);

    /// Mark a line editable or read-only
    fn set_editable(&mut self, line: &LineId, editable: bool);

    /// Place keyboard focus and a text cursor at the end of the line
    ///
    /// Best-effort: failure to acquire focus is silently ignored.
    fn request_focus(&mut self, line: &LineId);

    /// Apply the style descriptions to the panel and input elements
    fn apply_style(&mut self, style: &StyleSheet);

    /// Resize the panel to an explicit size
    fn set_panel_size(&mut self, size: PanelSize);

    /// Drain pending user-input events, oldest first
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;
}
