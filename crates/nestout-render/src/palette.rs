//! Semantic color palette for outline rendering.
//!
//! The renderer only knows three semantic colors: [`red`](ColorPalette::red)
//! for text lines, [`cyan`](ColorPalette::cyan) for field headers and
//! [`reset`](ColorPalette::reset) to close either. A palette is resolved
//! once per render call and handed to the renderer by value, so the
//! renderer itself never reads process-wide state.
//!
//! ```rust
//! use nestout_render::resolve_palette;
//!
//! let plain = resolve_palette(false);
//! assert_eq!(plain.red, "");
//!
//! let ansi = resolve_palette(true);
//! assert_eq!(ansi.reset, "\x1b[0m");
//! ```

/// ANSI code for red foreground text.
pub const ANSI_RED: &str = "\x1b[0;31m";
/// ANSI code for cyan foreground text.
pub const ANSI_CYAN: &str = "\x1b[0;36m";
/// ANSI code resetting all attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Escape codes (or empty strings) for each semantic color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    /// Opens a text line.
    pub red: String,
    /// Opens a field header line.
    pub cyan: String,
    /// Closes a line.
    pub reset: String,
}

impl ColorPalette {
    /// Palette with every entry empty; output is plain text.
    pub fn plain() -> Self {
        Self {
            red: String::new(),
            cyan: String::new(),
            reset: String::new(),
        }
    }

    /// Palette using the standard ANSI color codes.
    pub fn ansi() -> Self {
        Self {
            red: ANSI_RED.to_string(),
            cyan: ANSI_CYAN.to_string(),
            reset: ANSI_RESET.to_string(),
        }
    }

    /// Returns true if every entry is empty.
    pub fn is_plain(&self) -> bool {
        self.red.is_empty() && self.cyan.is_empty() && self.reset.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::plain()
    }
}

/// Resolves the palette for one render call.
pub fn resolve_palette(color_enabled: bool) -> ColorPalette {
    if color_enabled {
        ColorPalette::ansi()
    } else {
        ColorPalette::plain()
    }
}
