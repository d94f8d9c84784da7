//! Quantization of RGB pixels to the 8 standard ANSI foreground colors.

use std::fmt;

// Terminal style constants
pub const COLOR_RESET: &str = "\x1B[0m";
pub const COLOR_BOLD: &str = "\x1B[1m";

/// Channel values at or above this are "on" once saturated.
pub const HALF_SCALE: u8 = 128;

/// One of the 8 standard ANSI foreground colors.
///
/// `Black` doubles as "background": the renderer never paints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Pick the color for a pixel whose channels are already saturated.
    pub fn from_saturated(red: bool, green: bool, blue: bool) -> Self {
        match (red, green, blue) {
            (true, true, true) => AnsiColor::White,
            (true, true, false) => AnsiColor::Yellow,
            (true, false, true) => AnsiColor::Magenta,
            (true, false, false) => AnsiColor::Red,
            (false, true, true) => AnsiColor::Cyan,
            (false, true, false) => AnsiColor::Green,
            (false, false, true) => AnsiColor::Blue,
            (false, false, false) => AnsiColor::Black,
        }
    }

    /// SGR parameter for the foreground color (30-37).
    pub fn sgr_code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
        }
    }

    /// Escape sequence that switches the foreground to this color.
    pub fn foreground(self) -> String {
        format!("\x1B[{}m", self.sgr_code())
    }

    pub fn is_black(self) -> bool {
        self == AnsiColor::Black
    }

    pub fn name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Saturate a channel to on/off at the midpoint of the byte range.
#[inline]
pub fn saturate(channel: u8) -> bool {
    channel / HALF_SCALE == 1
}

/// Classify an RGB pixel as one of the 8 ANSI colors.
///
/// Each channel is saturated independently and the three resulting bits
/// select the color. This is a hard threshold, not a nearest-color search.
pub fn classify(red: u8, green: u8, blue: u8) -> AnsiColor {
    AnsiColor::from_saturated(saturate(red), saturate(green), saturate(blue))
}
