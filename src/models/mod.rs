use image::{ColorType, DynamicImage, ImageFormat};
use std::path::Path;

/// Attributes of a decoded image, reported in verbose mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub file_name: String,
    pub format: Option<ImageFormat>, // None when the decoder could not tell
    pub color_type: ColorType,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(path: &Path, format: Option<ImageFormat>, image: &DynamicImage) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            file_name,
            format,
            color_type: image.color(),
            width: image.width(),
            height: image.height(),
        }
    }

    /// Format name as reported by the decoder, e.g. "PNG"
    pub fn format_name(&self) -> String {
        self.format
            .and_then(|format| format.extensions_str().first())
            .map(|ext| ext.to_ascii_uppercase())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Format size as WIDTHxHEIGHT
    pub fn format_size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// One "Label: value" line per attribute
    pub fn attribute_lines(&self) -> Vec<String> {
        vec![
            format!("File name: {}", self.file_name),
            format!("Format: {}", self.format_name()),
            format!("Color type: {:?}", self.color_type),
            format!("Size: {}", self.format_size()),
            format!("Width: {} pixels", self.width),
            format!("Height: {} pixels", self.height),
        ]
    }
}
