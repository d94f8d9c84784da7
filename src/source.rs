//! Locating, validating and decoding the input image.
//!
//! Validation runs before any decoding: the extension is checked against the
//! supported set, then the file must exist. Only then is the decoder invoked,
//! and any failure it reports is collapsed into [`Error::DecodeFailure`].

use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::ImageInfo;

/// A decoded image together with its descriptive attributes.
///
/// The bitmap is owned here and released when this value is dropped.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub info: ImageInfo,
}

/// Absolute paths are kept as given, anything else is taken relative to `cwd`.
pub fn resolve_path(raw: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(raw);
    if path.has_root() || path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Case-insensitive extension check against the supported set.
pub fn check_extension(path: &Path, settings: &Settings) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    if settings.is_supported_extension(&extension) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat { extension })
    }
}

pub fn check_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Run every validation step on the raw path argument and return the
/// resolved path of an existing, supported file.
pub fn validate(raw: Option<&str>, cwd: &Path, settings: &Settings) -> Result<PathBuf> {
    let raw = raw.filter(|s| !s.is_empty()).ok_or(Error::MissingArgument)?;
    let path = resolve_path(raw, cwd);
    log::debug!("Resolved image path: {}", path.display());

    check_extension(&path, settings)?;
    check_exists(&path)?;

    Ok(path)
}

/// Decode the image at `path`.
///
/// The format is sniffed from the file contents rather than trusted from the
/// extension, so a mislabelled file still decodes when the codec is known.
pub fn load(path: &Path) -> Result<LoadedImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode().map_err(|e| {
        log::debug!("Decoder rejected {}: {e}", path.display());
        Error::from(e)
    })?;

    let info = ImageInfo::new(path, format, &image);
    Ok(LoadedImage { image, info })
}
