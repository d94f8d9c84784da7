pub mod formatter;

pub use formatter::*;

use std::fmt;
use std::io::{self, Write};

use crate::colors::{AnsiColor, COLOR_BOLD, COLOR_RESET};
use crate::config::PIXEL_WIDTH;

/// The rendered unit for one source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCell {
    /// A painted pixel: color, optional brightness, glyph.
    Colored {
        color: AnsiColor,
        bright: bool,
        glyph: char,
    },
    /// Unstyled glyph, used for black/white output and background pixels.
    Plain { glyph: char },
}

impl TextCell {
    /// Append the cell's text, escapes included, to `line`.
    pub fn push_to(&self, line: &mut String) {
        match *self {
            TextCell::Colored {
                color,
                bright,
                glyph,
            } => {
                line.push_str(&color.foreground());
                if bright {
                    line.push_str(COLOR_BOLD);
                }
                push_glyph(line, glyph);
                // Reset per cell so no style carries into the next one
                line.push_str(COLOR_RESET);
            }
            TextCell::Plain { glyph } => push_glyph(line, glyph),
        }
    }
}

fn push_glyph(line: &mut String, glyph: char) {
    for _ in 0..PIXEL_WIDTH {
        line.push(glyph);
    }
}

impl fmt::Display for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.push_to(&mut text);
        f.write_str(&text)
    }
}

/// A rendered image: one string per row of the resized bitmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    /// Write every row followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
