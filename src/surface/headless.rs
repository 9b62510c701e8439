//! Headless Rendering Surface
//!
//! Satisfies the surface interface with no UI toolkit attached: every
//! capability call is recorded for inspection, and input events are queued
//! by the host (or a test) and drained on the next poll.

use std::collections::VecDeque;

use crate::session::{Line, LineId};
use crate::style::StyleSheet;

use super::{PanelSize, RenderSurface, SurfaceEvent};

/// Recording surface for headless hosts and tests
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    lines: Vec<Line>,
    editable_log: Vec<(LineId, bool)>,
    focus_requests: Vec<LineId>,
    style: Option<StyleSheet>,
    panel_size: Option<PanelSize>,
    queued_events: VecDeque<SurfaceEvent>,
}

impl HeadlessSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text-changed event, as if the user had typed
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.queued_events
            .push_back(SurfaceEvent::TextChanged(text.into()));
    }

    /// Queue a submit-key event
    pub fn press_submit(&mut self) {
        self.queued_events.push_back(SurfaceEvent::SubmitPressed);
    }

    /// The most recently rendered line list
    pub fn rendered_lines(&self) -> &[Line] {
        &self.lines
    }

    /// Every `set_editable` call, in order
    pub fn editable_log(&self) -> &[(LineId, bool)] {
        &self.editable_log
    }

    /// Every focus request, in order
    pub fn focus_requests(&self) -> &[LineId] {
        &self.focus_requests
    }

    /// The line currently holding focus, if any was requested
    pub fn focused(&self) -> Option<&LineId> {
        self.focus_requests.last()
    }

    /// The most recently applied style
    pub fn style(&self) -> Option<&StyleSheet> {
        self.style.as_ref()
    }

    /// The most recently applied panel size
    pub fn panel_size(&self) -> Option<PanelSize> {
        self.panel_size
    }
}

impl RenderSurface for HeadlessSurface {
    fn render_lines(&mut self, lines: &[Line]) {
        self.lines = lines.to_vec();
    }

    fn set_editable(&mut self, line: &LineId, editable: bool) {
        self.editable_log.push((line.clone(), editable));
    }

    fn request_focus(&mut self, line: &LineId) {
        self.focus_requests.push(line.clone());
    }

    fn apply_style(&mut self, style: &StyleSheet) {
        self.style = Some(style.clone());
    }

    fn set_panel_size(&mut self, size: PanelSize) {
        self.panel_size = Some(size);
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        self.queued_events.drain(..).collect()
    }
}
