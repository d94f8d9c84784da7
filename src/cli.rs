//! Command-line surface.
//!
//! Positional arguments are taken as raw strings and validated here rather
//! than by clap: a bad width or height only produces a warning and the
//! default is kept. Flags go before the image path; from the path on every
//! word is a positional, so a fill character such as `-` or `--` survives.

use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use std::fmt;

use crate::config::{
    accept_fill_char, parse_dimension, DimensionError, RenderConfig, RenderMode, Settings,
};

pub const USAGE: &str = "image_name.ext [character] [Image_width] [Image_height] [BW]";

/// Render an image as colored text in the terminal
#[derive(Parser, Debug)]
#[command(name = "terminal-image")]
#[command(version, about = "Render an image as colored text in the terminal", long_about = None)]
pub struct Args {
    /// Resampling filter used when resizing
    #[arg(long, default_value = "lanczos3")]
    pub filter: ResizeFilter,

    /// Log arguments and image attributes
    #[arg(short, long)]
    pub verbose: bool,

    /// image_name.ext [character] [Image_width] [Image_height] [BW]
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub positionals: Vec<String>,
}

/// Resampling filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Which target dimension a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// Non-fatal problem with an argument; the default value is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgWarning {
    pub dimension: Dimension,
    pub reason: DimensionError,
}

impl fmt::Display for ArgWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.dimension {
            Dimension::Width => "width",
            Dimension::Height => "height",
        };
        match self.reason {
            DimensionError::NotPositive => write!(f, "Image {name} must be greater than 0"),
            DimensionError::NotANumber => write!(f, "The {name} of the image must be a number"),
        }
    }
}

/// Validated rendering options plus the warnings produced along the way.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub config: RenderConfig,
    pub warnings: Vec<ArgWarning>,
}

impl Args {
    fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// Image to render, absolute or relative to the current directory
    pub fn image_path(&self) -> Option<&str> {
        self.positional(0)
    }

    /// Character used for lit pixels (printable ASCII only)
    pub fn fill_character(&self) -> Option<&str> {
        self.positional(1)
    }

    /// Maximum width in pixels
    pub fn width(&self) -> Option<&str> {
        self.positional(2)
    }

    /// Maximum height in pixels
    pub fn height(&self) -> Option<&str> {
        self.positional(3)
    }

    /// `BW` selects black and white
    pub fn mode(&self) -> Option<&str> {
        self.positional(4)
    }

    /// Build the render configuration, starting from `settings` defaults.
    pub fn render_request(&self, settings: &Settings) -> RenderRequest {
        let mut config = RenderConfig::from_settings(settings).with_filter(self.filter.into());
        let mut warnings = Vec::new();

        if let Some(c) = self.fill_character().and_then(accept_fill_char) {
            config.fill_char = c;
        }

        if let Some(raw) = self.width() {
            match parse_dimension(raw) {
                Ok(width) => config.target_width = width,
                Err(reason) => warnings.push(ArgWarning {
                    dimension: Dimension::Width,
                    reason,
                }),
            }
        }

        if let Some(raw) = self.height() {
            match parse_dimension(raw) {
                Ok(height) => config.target_height = height,
                Err(reason) => warnings.push(ArgWarning {
                    dimension: Dimension::Height,
                    reason,
                }),
            }
        }

        config.mode = RenderMode::from_flag(self.mode());

        RenderRequest { config, warnings }
    }
}
