//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for terminal output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video for high visibility badges)
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for RLAY tags.
    pub const TAG_RELAY: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    /// Bright bold white for node identifiers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (coordinates, decorations).
    pub const GRAY: &str = "\x1b[90m";
    /// Green for link distances.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for nodes without any visible neighbour.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_relay: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_relay: colors::TAG_RELAY,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_relay: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// Colored when [`supports_color`] allows it, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Color is off when `NO_COLOR` is set (https://no-color.org/) or when
/// `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_enabled(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn color_enabled(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
