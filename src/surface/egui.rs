//! egui Rendering Surface
//!
//! A concrete [`RenderSurface`] built on `eframe::egui`: history rows render
//! as read-only monospace labels, the active row as a single-line text edit,
//! all inside a scroll area pinned to the bottom. The caret on the active
//! row is clamped past the prompt marker so it can never sit on or before
//! it.
//!
//! The opaque style descriptions are interpreted leniently here: recognized
//! attributes (background, text color, caret color, font size) are applied,
//! anything malformed falls back to the defaults. That fallback is this
//! layer's decision; the core passes values through verbatim.

use eframe::egui;

use crate::session::{Line, LineId, LineRole};
use crate::style::StyleSheet;

use super::{PanelSize, RenderSurface, SurfaceEvent};

/// Visual parameters resolved from the style descriptions
#[derive(Debug, Clone)]
struct SurfaceVisuals {
    background: egui::Color32,
    text: egui::Color32,
    caret: egui::Color32,
    font_size: f32,
}

impl Default for SurfaceVisuals {
    fn default() -> Self {
        Self {
            background: egui::Color32::BLACK,
            text: egui::Color32::WHITE,
            caret: egui::Color32::WHITE,
            font_size: 20.0,
        }
    }
}

/// egui-backed rendering surface
///
/// Drive it from the host's update loop: call [`EguiSurface::show`] each
/// frame with the `Ui` the panel should occupy, then pump the console so it
/// drains the events the frame produced.
#[derive(Debug, Default)]
pub struct EguiSurface {
    lines: Vec<Line>,
    /// Text under edit for the active row; kept in sync with the session
    draft: String,
    active_id: Option<LineId>,
    pending_focus: Option<LineId>,
    visuals: SurfaceVisuals,
    panel_size: Option<PanelSize>,
    events: Vec<SurfaceEvent>,
}

impl EguiSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the panel for one frame and collect input events
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(size) = self.panel_size {
            ui.set_min_size(egui::vec2(size.width, size.height));
        }

        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::ZERO, self.visuals.background);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    let mut active_response = None;
                    for index in 0..self.lines.len() {
                        if self.lines[index].editable() {
                            active_response = Some(self.render_active_row(ui));
                        } else {
                            let line = &self.lines[index];
                            ui.label(
                                egui::RichText::new(line.content.as_str())
                                    .font(egui::FontId::monospace(self.visuals.font_size))
                                    .color(self.visuals.text),
                            );
                        }
                    }
                    if let Some(response) = active_response {
                        self.handle_active_response(ui, response);
                    }
                });
            });
    }

    fn render_active_row(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.add(
            egui::TextEdit::singleline(&mut self.draft)
                .font(egui::FontId::monospace(self.visuals.font_size))
                .desired_width(f32::INFINITY)
                .text_color(self.visuals.text)
                .lock_focus(true),
        )
    }

    fn handle_active_response(&mut self, ui: &mut egui::Ui, response: egui::Response) {
        if response.changed() {
            self.events
                .push(SurfaceEvent::TextChanged(self.draft.clone()));
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.events.push(SurfaceEvent::SubmitPressed);
        }

        // Keep the caret past the prompt marker.
        self.clamp_caret(ui, &response, 1, false);

        let focus_due = match (&self.pending_focus, &self.active_id) {
            (Some(pending), Some(active)) => pending == active,
            _ => false,
        };
        if focus_due {
            response.request_focus();
            let end = self.draft.chars().count();
            self.clamp_caret(ui, &response, end, true);
            self.pending_focus = None;
        }
    }

    /// Move the caret so neither end of the selection sits before `index`;
    /// with `collapse`, put both ends exactly there.
    fn clamp_caret(&self, ui: &egui::Ui, response: &egui::Response, index: usize, collapse: bool) {
        if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), response.id) {
            if let Some(mut range) = state.cursor.char_range() {
                if collapse {
                    range.primary.index = index;
                    range.secondary.index = index;
                } else {
                    range.primary.index = range.primary.index.max(index);
                    range.secondary.index = range.secondary.index.max(index);
                }
                state.cursor.set_char_range(Some(range));
                state.store(ui.ctx(), response.id);
            }
        }
    }
}

impl RenderSurface for EguiSurface {
    fn render_lines(&mut self, lines: &[Line]) {
        self.lines = lines.to_vec();
        let active = self.lines.iter().find(|line| line.editable());
        self.active_id = active.map(|line| line.id.clone());
        if let Some(line) = active {
            if self.draft != line.content {
                self.draft = line.content.clone();
            }
        }
    }

    fn set_editable(&mut self, line: &LineId, editable: bool) {
        if let Some(stored) = self.lines.iter_mut().find(|stored| &stored.id == line) {
            stored.role = if editable {
                LineRole::Active
            } else {
                LineRole::History
            };
        }
    }

    fn request_focus(&mut self, line: &LineId) {
        self.pending_focus = Some(line.clone());
    }

    fn apply_style(&mut self, style: &StyleSheet) {
        let defaults = SurfaceVisuals::default();
        let mut visuals = SurfaceVisuals::default();
        for (key, value) in parse_description(&style.input) {
            match key {
                "background" => visuals.background = parse_color(value, defaults.background),
                "color" => visuals.text = parse_color(value, defaults.text),
                "caret-color" => visuals.caret = parse_color(value, defaults.caret),
                "font-size" => visuals.font_size = parse_px(value, defaults.font_size),
                _ => {}
            }
        }
        self.visuals = visuals;
    }

    fn set_panel_size(&mut self, size: PanelSize) {
        self.panel_size = Some(size);
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Split a `key: value; key: value;` description into pairs
fn parse_description(description: &str) -> impl Iterator<Item = (&str, &str)> {
    description.split(';').filter_map(|attribute| {
        let (key, value) = attribute.split_once(':')?;
        Some((key.trim(), value.trim()))
    })
}

/// Interpret a color value, falling back for anything unrecognized
fn parse_color(value: &str, fallback: egui::Color32) -> egui::Color32 {
    match value.to_ascii_lowercase().as_str() {
        "black" => egui::Color32::BLACK,
        "white" => egui::Color32::WHITE,
        "red" => egui::Color32::RED,
        "green" => egui::Color32::GREEN,
        "blue" => egui::Color32::BLUE,
        "yellow" => egui::Color32::YELLOW,
        "cyan" => egui::Color32::from_rgb(0, 255, 255),
        "magenta" => egui::Color32::from_rgb(255, 0, 255),
        "gray" | "grey" => egui::Color32::GRAY,
        "orange" => egui::Color32::from_rgb(255, 165, 0),
        hex => parse_hex_color(hex).unwrap_or(fallback),
    }
}

fn parse_hex_color(value: &str) -> Option<egui::Color32> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(egui::Color32::from_rgb(r, g, b))
}

/// Interpret a `<number>px` size, falling back for anything unrecognized
fn parse_px(value: &str, fallback: f32) -> f32 {
    value
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(fallback)
}
