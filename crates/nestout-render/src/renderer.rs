//! The nested outline renderer.
//!
//! [`NestedRenderer`] walks a [`RenderValue`] depth first and emits:
//!
//! - one line per line of every [`Text`](RenderValue::Text) block, colored
//!   with the palette's `red`
//! - one `name:` header per field of every [`Fields`](RenderValue::Fields)
//!   map, colored with the palette's `cyan`, followed by the field's value
//!   rendered one level deeper
//!
//! Fields are visited in ascending name order and each nesting level adds
//! four spaces of indentation.
//!
//! ```rust
//! use nestout_render::{NestedRenderer, RenderValue};
//!
//! let value = RenderValue::fields([
//!     ("b", RenderValue::text("x")),
//!     ("a", RenderValue::text("y")),
//! ]);
//!
//! let output = NestedRenderer::plain().render(&value).unwrap();
//! assert_eq!(output, "a:\n    y\nb:\n    x\n");
//! ```
//!
//! # Unsupported Values
//!
//! Values outside the two shapes are governed by [`UnsupportedPolicy`]. The
//! default, [`Drop`](UnsupportedPolicy::Drop), skips them silently so a
//! report is still produced for the rest of the tree.
//! [`Reject`](UnsupportedPolicy::Reject) fails the whole render instead.
//!
//! # Depth Ceiling
//!
//! A node nested deeper than [`max_depth`](NestedRenderer::with_max_depth)
//! fails the render with [`RenderError::MaxDepthExceeded`] instead of
//! growing the stack without bound.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::ColorChoice;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::palette::{resolve_palette, ColorPalette};
use crate::strip::strip_escapes;
use crate::value::RenderValue;

/// Default nesting ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Spaces added per nesting level.
pub const INDENT_STEP: usize = 4;

/// What the renderer does with a value that is neither text nor fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Contribute nothing to the output and carry on.
    #[default]
    Drop,
    /// Fail with [`RenderError::UnsupportedValue`].
    Reject,
}

/// Renders [`RenderValue`] trees as indented outlines.
///
/// The palette is fixed at construction; a renderer holds no other state
/// and can be shared across threads.
#[derive(Debug, Clone)]
pub struct NestedRenderer {
    palette: ColorPalette,
    max_depth: usize,
    unsupported: UnsupportedPolicy,
}

impl NestedRenderer {
    /// Creates a renderer with the given palette and default limits.
    pub fn new(palette: ColorPalette) -> Self {
        Self {
            palette,
            max_depth: DEFAULT_MAX_DEPTH,
            unsupported: UnsupportedPolicy::Drop,
        }
    }

    /// Creates a renderer that never emits color codes.
    pub fn plain() -> Self {
        Self::new(ColorPalette::plain())
    }

    /// Creates a renderer from a config, resolving its color choice now.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(resolve_palette(config.color.resolve()))
            .with_max_depth(config.max_depth)
            .with_unsupported(config.unsupported)
    }

    /// Sets the deepest nesting level that may be rendered.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the handling of unsupported values.
    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn unsupported(&self) -> UnsupportedPolicy {
        self.unsupported
    }

    /// Renders `value` as an outline.
    pub fn render(&self, value: &RenderValue) -> Result<String, RenderError> {
        self.render_prefixed(value, "")
    }

    /// Renders `value`, inserting `prefix` after the indentation of every
    /// root-level line. Nested lines never carry the prefix.
    pub fn render_prefixed(
        &self,
        value: &RenderValue,
        prefix: &str,
    ) -> Result<String, RenderError> {
        tracing::trace!(
            kind = value.kind(),
            max_depth = self.max_depth,
            "rendering nested outline"
        );
        let mut out = String::new();
        let mut path = Vec::new();
        self.render_at(value, 0, prefix, &mut path, &mut out)?;
        Ok(out)
    }

    fn render_at<'v>(
        &self,
        value: &'v RenderValue,
        depth: usize,
        prefix: &str,
        path: &mut Vec<&'v str>,
        out: &mut String,
    ) -> Result<(), RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::MaxDepthExceeded {
                limit: self.max_depth,
                path: format_path(path),
            });
        }

        match value {
            RenderValue::Text(text) => {
                for line in text.split('\n') {
                    let content = strip_escapes(line);
                    self.push_line(out, &self.palette.red, depth, prefix, &content, "");
                }
            }
            RenderValue::Fields(fields) => {
                let mut entries: Vec<_> = fields.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

                for (name, child) in entries {
                    self.push_line(out, &self.palette.cyan, depth, prefix, name, ":");
                    path.push(name);
                    self.render_at(child, depth + 1, "", path, out)?;
                    path.pop();
                }
            }
            RenderValue::Other(_) => match self.unsupported {
                UnsupportedPolicy::Drop => {
                    tracing::debug!(
                        path = %format_path(path),
                        kind = value.kind(),
                        "dropping unsupported value"
                    );
                }
                UnsupportedPolicy::Reject => {
                    return Err(RenderError::UnsupportedValue {
                        path: format_path(path),
                        kind: value.kind(),
                    });
                }
            },
        }

        Ok(())
    }

    fn push_line(
        &self,
        out: &mut String,
        color: &str,
        depth: usize,
        prefix: &str,
        content: &str,
        suffix: &str,
    ) {
        out.push_str(color);
        out.extend(std::iter::repeat(' ').take(depth * INDENT_STEP));
        out.push_str(prefix);
        out.push_str(content);
        out.push_str(suffix);
        out.push_str(&self.palette.reset);
        out.push('\n');
    }
}

impl Default for NestedRenderer {
    fn default() -> Self {
        Self::plain()
    }
}

fn format_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

/// Renders `value`, coloring it when the process-wide detector says so.
pub fn render(value: &RenderValue) -> Result<String, RenderError> {
    render_with_palette(value, &resolve_palette(ColorChoice::Auto.resolve()))
}

/// Renders `value` with an explicit palette.
pub fn render_with_palette(
    value: &RenderValue,
    palette: &ColorPalette,
) -> Result<String, RenderError> {
    NestedRenderer::new(palette.clone()).render(value)
}

/// Renders JSON data with an explicit color choice.
///
/// ```rust
/// use nestout_render::{render_json, ColorChoice};
/// use serde_json::json;
///
/// let data = json!({"minion1": {"reason": "timeout"}});
/// let output = render_json(&data, ColorChoice::Never).unwrap();
/// assert_eq!(output, "minion1:\n    reason:\n        timeout\n");
/// ```
pub fn render_json(data: &Value, color: ColorChoice) -> Result<String, RenderError> {
    let value = RenderValue::from(data.clone());
    render_with_palette(&value, &resolve_palette(color.resolve()))
}

/// Renders any serializable data with an explicit color choice.
pub fn render_serialize<T: Serialize + ?Sized>(
    data: &T,
    color: ColorChoice,
) -> Result<String, RenderError> {
    let value = RenderValue::from_serialize(data)?;
    render_with_palette(&value, &resolve_palette(color.resolve()))
}
