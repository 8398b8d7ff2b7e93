//! Style tokens for table lines and headers.
//!
//! A [`Style`] is a single ANSI SGR (Select Graphic Rendition) code. Tables
//! only ever switch between a handful of these, so there is no composition:
//! switching style always emits exactly one `ESC [ <n> m` sequence.

use std::fmt;
use std::str::FromStr;

/// A single SGR attribute or colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Reset all attributes (SGR 0).
    #[default]
    Normal,
    /// Bold/bright text (SGR 1).
    Bold,
    /// Dim/faint text (SGR 2).
    Dim,
    /// Italic text (SGR 3).
    Italic,
    /// Single underline (SGR 4).
    Underline,
    /// Slow blinking text (SGR 5).
    Blink,
    /// Reverse video (SGR 7).
    Reverse,
    /// Concealed text (SGR 8).
    Hidden,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Terminal default foreground (SGR 39).
    Default,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    /// Terminal default background (SGR 49).
    BgDefault,
}

impl Style {
    const NAMES: [(Self, &'static str); 35] = [
        (Self::Normal, "normal"),
        (Self::Bold, "bold"),
        (Self::Dim, "dim"),
        (Self::Italic, "italic"),
        (Self::Underline, "underline"),
        (Self::Blink, "blink"),
        (Self::Reverse, "reverse"),
        (Self::Hidden, "hidden"),
        (Self::Black, "black"),
        (Self::Red, "red"),
        (Self::Green, "green"),
        (Self::Yellow, "yellow"),
        (Self::Blue, "blue"),
        (Self::Magenta, "magenta"),
        (Self::Cyan, "cyan"),
        (Self::White, "white"),
        (Self::Default, "default"),
        (Self::BrightBlack, "bright_black"),
        (Self::BrightRed, "bright_red"),
        (Self::BrightGreen, "bright_green"),
        (Self::BrightYellow, "bright_yellow"),
        (Self::BrightBlue, "bright_blue"),
        (Self::BrightMagenta, "bright_magenta"),
        (Self::BrightCyan, "bright_cyan"),
        (Self::BrightWhite, "bright_white"),
        (Self::BgBlack, "on_black"),
        (Self::BgRed, "on_red"),
        (Self::BgGreen, "on_green"),
        (Self::BgYellow, "on_yellow"),
        (Self::BgBlue, "on_blue"),
        (Self::BgMagenta, "on_magenta"),
        (Self::BgCyan, "on_cyan"),
        (Self::BgWhite, "on_white"),
        (Self::BgDefault, "on_default"),
        (Self::Normal, "reset"),
    ];

    /// The SGR parameter for this style.
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Hidden => 8,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Default => 39,
            Self::BgBlack => 40,
            Self::BgRed => 41,
            Self::BgGreen => 42,
            Self::BgYellow => 43,
            Self::BgBlue => 44,
            Self::BgMagenta => 45,
            Self::BgCyan => 46,
            Self::BgWhite => 47,
            Self::BgDefault => 49,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// The escape sequence that switches the terminal to this style.
    #[must_use]
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.sgr_code())
    }

    /// The lowercase name accepted by [`Style::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(style, _)| *style == self)
            .map_or("normal", |(_, name)| name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for style name parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParseError(String);

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown style: {}", self.0)
    }
}

impl std::error::Error for StyleParseError {}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::NAMES
            .iter()
            .find(|(_, name)| *name == normalized)
            .map(|(style, _)| *style)
            .ok_or_else(|| StyleParseError(s.to_string()))
    }
}
