//! Color choice and process-wide color detection.
//!
//! Whether a report is colored is decided once per render call. Callers
//! either pass an explicit [`ColorChoice`] or let [`ColorChoice::Auto`]
//! consult the process-wide detector.
//!
//! # Auto Detection
//!
//! The default detector disables color when `NO_COLOR` is set to a
//! non-empty value and otherwise defers to [`console::colors_enabled`],
//! which checks whether stdout is a terminal and honours `CLICOLOR` and
//! `CLICOLOR_FORCE`.
//!
//! Use [`set_color_detector`] to override detection for testing:
//!
//! ```rust
//! use nestout_render::{set_color_detector, ColorChoice};
//!
//! set_color_detector(|| false);
//! assert!(!ColorChoice::Auto.resolve());
//! ```

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Whether rendered output carries terminal color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Ask the process-wide detector.
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl ColorChoice {
    /// Resolves this choice to a concrete on/off decision.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect_color_enabled(),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "yes" | "on" => Ok(ColorChoice::Always),
            "never" | "no" | "off" => Ok(ColorChoice::Never),
            other => Err(format!(
                "invalid color choice '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}

type ColorDetector = fn() -> bool;

static COLOR_DETECTOR: Lazy<Mutex<ColorDetector>> =
    Lazy::new(|| Mutex::new(default_color_detector));

/// Overrides the detector used by [`ColorChoice::Auto`].
pub fn set_color_detector(detector: ColorDetector) {
    let mut guard = COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the default environment/terminal based detector.
pub fn reset_color_detector() {
    set_color_detector(default_color_detector);
}

/// Runs the configured detector.
pub fn detect_color_enabled() -> bool {
    let detector = *COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let enabled = detector();
    tracing::debug!(enabled, "resolved automatic color choice");
    enabled
}

fn default_color_detector() -> bool {
    color_enabled_for(std::env::var_os("NO_COLOR"), console::colors_enabled())
}

/// A non-empty `NO_COLOR` turns color off; otherwise the terminal decides.
fn color_enabled_for(no_color: Option<OsString>, terminal_colors: bool) -> bool {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    terminal_colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_explicit_choices_ignore_detector() {
        assert!(ColorChoice::Always.resolve());
        assert!(!ColorChoice::Never.resolve());
    }

    #[test]
    #[serial]
    fn test_auto_uses_detector_override() {
        set_color_detector(|| true);
        assert!(ColorChoice::Auto.resolve());

        set_color_detector(|| false);
        assert!(!ColorChoice::Auto.resolve());

        reset_color_detector();
    }

    #[test]
    fn test_no_color_overrides_terminal() {
        assert!(!color_enabled_for(Some("1".into()), true));
        assert!(!color_enabled_for(Some("1".into()), false));
    }

    #[test]
    fn test_empty_no_color_defers_to_terminal() {
        assert!(color_enabled_for(Some(OsString::new()), true));
        assert!(!color_enabled_for(Some(OsString::new()), false));
    }

    #[test]
    fn test_unset_no_color_defers_to_terminal() {
        assert!(color_enabled_for(None, true));
        assert!(!color_enabled_for(None, false));
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_default_detector() {
        reset_color_detector();
        let terminal_colors = console::colors_enabled();
        console::set_colors_enabled(true);
        std::env::set_var("NO_COLOR", "1");
        assert!(!detect_color_enabled());

        std::env::remove_var("NO_COLOR");
        assert!(detect_color_enabled());
        console::set_colors_enabled(terminal_colors);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("auto".parse::<ColorChoice>(), Ok(ColorChoice::Auto));
        assert_eq!("ALWAYS".parse::<ColorChoice>(), Ok(ColorChoice::Always));
        assert_eq!("off".parse::<ColorChoice>(), Ok(ColorChoice::Never));
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for choice in [ColorChoice::Auto, ColorChoice::Always, ColorChoice::Never] {
            assert_eq!(choice.to_string().parse::<ColorChoice>(), Ok(choice));
        }
    }

    #[test]
    fn test_deserialize_lowercase() {
        let choice: ColorChoice = serde_yaml::from_str("never").unwrap();
        assert_eq!(choice, ColorChoice::Never);
    }
}
