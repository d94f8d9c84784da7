use image::{DynamicImage, GenericImageView};
use std::borrow::Cow;

use super::{Frame, TextCell};
use crate::colors::{self, HALF_SCALE};
use crate::config::{RenderConfig, RenderMode, CHAR_BLACK};

/// Turns bitmaps into frames of styled text for one render configuration.
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Resize, classify every pixel and assemble the rows.
    pub fn render(&self, bitmap: &DynamicImage) -> Frame {
        let resized = self.resize_to_fit(bitmap);
        log::debug!(
            "Resized {}x{} to {}x{}",
            bitmap.width(),
            bitmap.height(),
            resized.width(),
            resized.height()
        );

        let lines = match self.config.mode {
            RenderMode::BlackAndWhite => self.black_and_white_lines(&resized),
            RenderMode::Color => self.color_lines(&resized),
        };

        Frame { lines }
    }

    /// Shrink the image so it fits inside the target box with its aspect
    /// ratio kept. The binding dimension lands on its bound, the other one is
    /// proportionally smaller. Images already inside the box are never
    /// enlarged, so the output is bounded by the source size.
    pub fn resize_to_fit<'a>(&self, bitmap: &'a DynamicImage) -> Cow<'a, DynamicImage> {
        let (max_width, max_height) = (
            self.config.target_width.get(),
            self.config.target_height.get(),
        );

        if bitmap.width() <= max_width && bitmap.height() <= max_height {
            Cow::Borrowed(bitmap)
        } else {
            Cow::Owned(bitmap.resize(max_width, max_height, self.config.filter))
        }
    }

    pub fn color_cell(&self, red: u8, green: u8, blue: u8) -> TextCell {
        let color = colors::classify(red, green, blue);
        if color.is_black() {
            TextCell::Plain { glyph: CHAR_BLACK }
        } else {
            TextCell::Colored {
                color,
                bright: true,
                glyph: self.config.fill_char,
            }
        }
    }

    pub fn gray_cell(&self, luma: u8) -> TextCell {
        if luma > HALF_SCALE {
            TextCell::Plain {
                glyph: self.config.fill_char,
            }
        } else {
            TextCell::Plain { glyph: CHAR_BLACK }
        }
    }

    fn color_lines(&self, img: &DynamicImage) -> Vec<String> {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut lines = Vec::with_capacity(height as usize);

        for y in 0..height {
            let mut line = String::new();

            for x in 0..width {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                self.color_cell(r, g, b).push_to(&mut line);
            }

            lines.push(line);
        }

        lines
    }

    fn black_and_white_lines(&self, img: &DynamicImage) -> Vec<String> {
        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();
        let mut lines = Vec::with_capacity(height as usize);

        for y in 0..height {
            let mut line = String::new();

            for x in 0..width {
                let [luma] = gray.get_pixel(x, y).0;
                self.gray_cell(luma).push_to(&mut line);
            }

            lines.push(line);
        }

        lines
    }
}

/// Render `bitmap` with `config` in one call.
pub fn render(bitmap: &DynamicImage, config: &RenderConfig) -> Frame {
    FrameRenderer::new(*config).render(bitmap)
}

/// Dimensions `bitmap` will have once fitted into the configured box.
/// Nothing is resampled when the bitmap already fits.
pub fn fitted_dimensions(bitmap: &DynamicImage, config: &RenderConfig) -> (u32, u32) {
    FrameRenderer::new(*config).resize_to_fit(bitmap).dimensions()
}
