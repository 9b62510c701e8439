//! Shellpane - an embeddable shell-style console panel
//!
//! This library provides a scrollable console widget model: a sequence of
//! read-only history lines, a single editable prompt line, buffered output
//! writes, and command dispatch to the host application.
//!
//! ## Features
//!
//! - **Block-style history:** Output and submitted commands become immutable
//!   history lines, appended in order and never reordered
//! - **Protected prompt:** The active line always starts with the `>` marker;
//!   user edits that remove it are corrected, not rejected
//! - **Buffered writes:** `write()` returns a scoped buffer that flushes into
//!   discrete history lines when it goes out of scope
//! - **Command dispatch:** Submitted lines are stripped of the marker and
//!   delivered to every registered subscriber
//! - **Pluggable rendering:** Any UI toolkit (or none, for headless hosts and
//!   tests) can satisfy the [`RenderSurface`] interface; an egui
//!   implementation ships behind the `egui-surface` feature
//!
//! ## Module Organization
//!
//! - [`session`] - Line-session state machine (lines, roles, prompt marker)
//! - [`buffer`] - Buffered output values and the drop-flush guard
//! - [`dispatch`] - Command extraction and subscriber notification
//! - [`focus`] - Deferred focus requests with generation tokens
//! - [`style`] - Style-description generation from a configuration
//! - [`surface`] - Rendering-surface capability interface and implementations
//! - [`console`] - Host-facing facade tying the pieces together
//! - [`config`] - Console configuration value object
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```
//! use shellpane::{Console, ConsoleConfig, HeadlessSurface};
//!
//! # fn main() -> shellpane::Result<()> {
//! let mut console = Console::new(HeadlessSurface::new());
//! console.initialize(ConsoleConfig::default().with_welcome_message("hello"), None)?;
//! console.on_command(|command| println!("host received: {}", command.text));
//!
//! // Buffered write: flushed into history lines when the guard drops.
//! console.write("processed ").push(3_u64).push(" entries");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Shellpane is single-threaded and event-driven: every state transition
//! happens on the host's UI thread, either from a host call (buffered write,
//! style refresh) or from a surface event (text change, submit key). The only
//! deferred work is focus placement, which is applied on the pump following a
//! structural change and guarded by a generation token so stale requests are
//! dropped.
//!
//! ## Safety and Reliability
//!
//! - **No panics:** Fallible host operations return `Result`
//! - **Narrow error surface:** Unsupported buffered values are logged and
//!   skipped; malformed style attributes pass through verbatim for the
//!   rendering layer to handle

#[macro_use]
extern crate tracing;

pub mod buffer;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod focus;
pub mod session;
pub mod style;
pub mod surface;

// Re-exports for core functionality
pub use config::{ConsoleConfig, ConsoleMode};
pub use console::Console;
pub use error::{Error, Result};
pub use session::{Line, LineId, LineRole, LineSession, PROMPT_MARKER};

// Convenience re-exports for common types
pub use buffer::{BufferValue, OutputBuffer};
pub use dispatch::{CommandDispatcher, CommandEvent};
pub use focus::FocusCoordinator;
pub use style::StyleSheet;
pub use surface::{HeadlessSurface, PanelSize, RenderSurface, SurfaceEvent};

#[cfg(feature = "egui-surface")]
pub use surface::EguiSurface;

// Version information
/// The current version of shellpane from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
