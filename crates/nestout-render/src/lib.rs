//! # Nestout Render - Nested Outline Reports
//!
//! `nestout-render` turns nested data made of text blocks and named fields
//! into an indented, optionally colored outline. It is used to summarize
//! targets that failed to answer a request, one header per target and one
//! line per status message:
//!
//! ```text
//! minion1:
//!     Minion did not return. [No response]
//! minion2:
//!     reason:
//!         timeout
//! ```
//!
//! ## Core Concepts
//!
//! - [`RenderValue`]: The input tree (`Text`, `Fields`, or an unsupported `Other`)
//! - [`NestedRenderer`]: Walks the tree and builds the report
//! - [`ColorPalette`]: Escape codes for text lines, headers and resets
//! - [`ColorChoice`]: Auto/Always/Never color selection
//! - [`UnsupportedPolicy`]: Drop or reject values outside the two shapes
//! - [`RenderConfig`]: YAML-loadable renderer settings
//!
//! ## Quick Start
//!
//! ```rust
//! use nestout_render::{render_json, ColorChoice};
//! use serde_json::json;
//!
//! let data = json!({
//!     "b": "x",
//!     "a": "y",
//! });
//!
//! let output = render_json(&data, ColorChoice::Never).unwrap();
//! assert_eq!(output, "a:\n    y\nb:\n    x\n");
//! ```
//!
//! ## Explicit Palettes
//!
//! The renderer never reads global state itself. Resolve a palette once and
//! hand it over:
//!
//! ```rust
//! use nestout_render::{resolve_palette, NestedRenderer, RenderValue, UnsupportedPolicy};
//!
//! let renderer = NestedRenderer::new(resolve_palette(false))
//!     .with_max_depth(16)
//!     .with_unsupported(UnsupportedPolicy::Reject);
//!
//! let output = renderer.render(&RenderValue::text("line1\nline2")).unwrap();
//! assert_eq!(output, "line1\nline2\n");
//! ```

pub mod color;
pub mod config;
mod error;
pub mod palette;
pub mod renderer;
mod strip;
pub mod value;

pub use error::RenderError;

pub use color::{detect_color_enabled, reset_color_detector, set_color_detector, ColorChoice};
pub use config::RenderConfig;
pub use palette::{resolve_palette, ColorPalette};
pub use renderer::{
    render, render_json, render_serialize, render_with_palette, NestedRenderer,
    UnsupportedPolicy, DEFAULT_MAX_DEPTH, INDENT_STEP,
};
pub use strip::strip_escapes;
pub use value::{RenderValue, PARSE_NESTING_LIMIT};
