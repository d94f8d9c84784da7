//! Render raster images as colored text in a terminal.
//!
//! Every pixel of the (resized) image becomes a two-character cell painted
//! with one of the 8 standard ANSI foreground colors, or, in black and white
//! mode, either the fill character or blank space.

pub mod app;
pub mod cli;
pub mod colors;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod source;

pub use colors::{classify, AnsiColor};
pub use config::{RenderConfig, RenderMode, Settings};
pub use display::{render, Frame, FrameRenderer, TextCell};
pub use error::{DecodeErrorKind, Error};
