//! Style-Description Generation
//!
//! Turns a [`ConsoleConfig`] into the opaque style descriptions applied to
//! the panel and to input-line elements. Stateless: the full description is
//! regenerated on every refresh, with no incremental update.
//!
//! Attribute values pass through verbatim. Malformed colors or sizes are
//! deliberately not validated here; the rendering layer decides fallback
//! behavior for values it cannot interpret.

use crate::config::ConsoleConfig;

/// The rendered style descriptions for one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Description applied to the panel as a whole
    pub panel: String,
    /// Description scoped to input-line elements; same attribute set plus
    /// the cursor color
    pub input: String,
}

/// Render the style descriptions for `config`
pub fn render(config: &ConsoleConfig) -> StyleSheet {
    let panel = format!(
        "background: {}; color: {}; font-size: {}px; border-width: 0; border-style: outset;",
        config.background_color, config.text_color, config.font_size
    );
    let input = format!("{} caret-color: {};", panel, config.cursor_color);
    StyleSheet { panel, input }
}
