//! Error types for outline rendering.
//!
//! [`RenderError`] is the single error type returned by every fallible
//! operation in this crate: converting foreign data into a
//! [`RenderValue`](crate::RenderValue), loading a
//! [`RenderConfig`](crate::RenderConfig), and rendering itself.

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A value that is neither text nor a field map was found while the
    /// renderer runs with [`UnsupportedPolicy::Reject`](crate::UnsupportedPolicy::Reject).
    #[error("unsupported render value ({kind}) at {path}")]
    UnsupportedValue {
        /// Dotted field path of the offending node (`<root>` for the root).
        path: String,
        /// Kind of the offending value, e.g. `number` or `list`.
        kind: &'static str,
    },

    /// The input nests deeper than the configured ceiling.
    #[error("max nesting depth {limit} exceeded at {path}")]
    MaxDepthExceeded {
        /// The configured ceiling.
        limit: usize,
        /// Dotted field path of the first node past the ceiling.
        path: String,
    },

    /// Input data could not be converted into a render value.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (e.g. reading a config file from disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
