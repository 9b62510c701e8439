//! Test Utilities
//!
//! Shared helpers for the shellpane test suites.

use shellpane::{Console, ConsoleConfig, HeadlessSurface};

/// Initialize tracing output for a test run; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A console over a headless surface, initialized with defaults.
pub fn ready_console() -> Console<HeadlessSurface> {
    ready_console_with(ConsoleConfig::default())
}

/// A console over a headless surface, initialized with `config`.
pub fn ready_console_with(config: ConsoleConfig) -> Console<HeadlessSurface> {
    init_tracing();
    let mut console = Console::new(HeadlessSurface::new());
    console
        .initialize(config, None)
        .expect("console initialization");
    console
}
