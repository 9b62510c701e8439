//! Console Facade
//!
//! Ties the line session, command dispatcher, style generation, and focus
//! coordination to a rendering surface, and exposes the host API: one-time
//! initialization, scoped buffered writes, command subscription, style
//! refresh, and the per-update-cycle pump that routes surface events.

use crate::buffer::{BufferValue, OutputBuffer};
use crate::config::ConsoleConfig;
use crate::dispatch::{CommandDispatcher, CommandEvent};
use crate::error::{Error, Result};
use crate::focus::FocusCoordinator;
use crate::session::LineSession;
use crate::style;
use crate::surface::{PanelSize, RenderSurface, SurfaceEvent};

/// An embeddable console panel bound to a rendering surface
pub struct Console<S: RenderSurface> {
    session: LineSession,
    dispatcher: CommandDispatcher,
    focus: FocusCoordinator,
    config: ConsoleConfig,
    surface: S,
}

impl<S: RenderSurface> Console<S> {
    /// Create an uninitialized console bound to `surface`
    pub fn new(surface: S) -> Self {
        Self {
            session: LineSession::new(),
            dispatcher: CommandDispatcher::new(),
            focus: FocusCoordinator::new(),
            config: ConsoleConfig::default(),
            surface,
        }
    }

    /// One-time setup: apply style and optional size, create the first lines
    ///
    /// A non-empty welcome message in `config` is flushed into history with
    /// a fresh prompt line after it. Calling `initialize` a second time
    /// returns [`Error::AlreadyInitialized`] and leaves the console
    /// untouched.
    pub fn initialize(&mut self, config: ConsoleConfig, size: Option<PanelSize>) -> Result<()> {
        if self.session.is_ready() {
            return Err(Error::AlreadyInitialized);
        }

        if let Some(size) = size {
            self.surface.set_panel_size(size);
        }
        self.config = config;
        self.surface.apply_style(&style::render(&self.config));

        let welcome = self.config.welcome_message.clone();
        self.session.initialize(&welcome)?;
        self.sync_surface();
        self.schedule_focus();

        info!(lines = self.session.len(), "console initialized");
        Ok(())
    }

    /// Begin a buffered write seeded with `value`
    ///
    /// The returned buffer flushes into history lines when it goes out of
    /// scope; see [`OutputBuffer`].
    pub fn write(&mut self, value: impl Into<BufferValue>) -> OutputBuffer<'_, S> {
        let mut buffer = OutputBuffer::new(self);
        buffer.push(value);
        buffer
    }

    /// Begin an empty buffered write
    pub fn writer(&mut self) -> OutputBuffer<'_, S> {
        OutputBuffer::new(self)
    }

    /// Register a subscriber invoked with every submitted command
    pub fn on_command(&mut self, subscriber: impl FnMut(&CommandEvent) + 'static) {
        self.dispatcher.subscribe(subscriber);
    }

    /// Re-apply the full style to the panel and input elements
    pub fn refresh_style(&mut self, config: ConsoleConfig) {
        self.config = config;
        self.surface.apply_style(&style::render(&self.config));
        debug!("style refreshed");
    }

    /// Route a single surface event into the session
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Result<()> {
        match event {
            SurfaceEvent::TextChanged(text) => {
                let corrected = self.session.edit_active(&text)?;
                if corrected {
                    // Push the normalized content back to the surface.
                    self.sync_surface();
                }
                Ok(())
            }
            SurfaceEvent::SubmitPressed => self.submit(),
        }
    }

    /// Drain surface events and apply any due focus request
    ///
    /// Call once per host update cycle. Focus scheduled during this pump's
    /// own structural changes is applied at the end of the pump, after the
    /// surface has seen the new line list.
    pub fn pump(&mut self) -> Result<()> {
        for event in self.surface.poll_events() {
            self.handle_event(event)?;
        }
        self.apply_due_focus();
        Ok(())
    }

    /// The line session (read-only)
    pub fn session(&self) -> &LineSession {
        &self.session
    }

    /// The active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The rendering surface (read-only)
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering surface, mutably (event injection, host-side plumbing)
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Flush path shared by every buffered write; infallible by design, a
    /// write before initialization is logged and dropped.
    pub(crate) fn commit_write(&mut self, text: &str) {
        match self.session.flush(text) {
            Ok(()) => {
                self.sync_surface();
                self.schedule_focus();
            }
            Err(err) => warn!("buffered write dropped: {}", err),
        }
    }

    fn submit(&mut self) -> Result<()> {
        let command = self.session.submit_active()?;
        self.dispatcher.emit(&command);
        self.sync_surface();
        self.schedule_focus();
        Ok(())
    }

    fn sync_surface(&mut self) {
        self.surface.render_lines(self.session.lines());

        // Earlier lines were frozen by previous syncs; only the tail changes
        // shape: the just-frozen line goes read-only, the new active line
        // becomes the editable one.
        if let Some(frozen) = self.session.history().last() {
            let id = frozen.id.clone();
            self.surface.set_editable(&id, false);
        }
        if let Some(active) = self.session.active_line() {
            let id = active.id.clone();
            self.surface.set_editable(&id, true);
        }
    }

    fn schedule_focus(&mut self) {
        if let Some(active) = self.session.active_line() {
            self.focus
                .schedule(active.id.clone(), self.session.generation());
        }
    }

    fn apply_due_focus(&mut self) {
        if let Some(line) = self.focus.take_due(self.session.generation()) {
            self.surface.request_focus(&line);
        }
    }
}
