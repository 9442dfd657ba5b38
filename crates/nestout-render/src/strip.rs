//! Escape-sequence stripping.

/// Removes ANSI escape sequences from `line`.
///
/// Text coming from upstream sources may already carry color codes; these
/// are removed before the palette's own codes are applied so that lines
/// never end up with nested or garbled coloring. Idempotent.
///
/// ```rust
/// use nestout_render::strip_escapes;
///
/// assert_eq!(strip_escapes("\x1b[1;32mok\x1b[0m"), "ok");
/// assert_eq!(strip_escapes("plain"), "plain");
/// ```
pub fn strip_escapes(line: &str) -> String {
    console::strip_ansi_codes(line).into_owned()
}
