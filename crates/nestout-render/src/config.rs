//! Renderer configuration.
//!
//! [`RenderConfig`] gathers the knobs a caller may want to keep outside the
//! code: the color choice, the nesting ceiling and what to do with values
//! outside the two supported shapes. Every field has a default, so a
//! config file only needs to name what it changes.
//!
//! ```rust
//! use nestout_render::{ColorChoice, RenderConfig, UnsupportedPolicy};
//!
//! let config = RenderConfig::from_yaml(r#"
//! color: never
//! unsupported: reject
//! "#).unwrap();
//!
//! assert_eq!(config.color, ColorChoice::Never);
//! assert_eq!(config.unsupported, UnsupportedPolicy::Reject);
//! assert_eq!(config.max_depth, nestout_render::DEFAULT_MAX_DEPTH);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::color::ColorChoice;
use crate::error::RenderError;
use crate::renderer::{UnsupportedPolicy, DEFAULT_MAX_DEPTH};

/// Settings used to build a [`NestedRenderer`](crate::NestedRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Whether output is colored.
    pub color: ColorChoice,
    /// Deepest field nesting rendered before failing.
    pub max_depth: usize,
    /// Handling of values that are neither text nor fields.
    pub unsupported: UnsupportedPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
            unsupported: UnsupportedPolicy::Drop,
        }
    }
}

impl RenderConfig {
    /// Parses a config from YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, RenderError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Loads a config from a YAML file.
    ///
    /// A file that cannot be read yields [`RenderError::Io`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Self::from_yaml(&content)
    }
}
